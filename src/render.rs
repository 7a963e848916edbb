use crate::config::SiteConfig;
use crate::ui::{COPIED_FOR, COPIED_LABEL, COPY_LABEL};

/// Wraps page-specific HTML in the site shell: head, styles, footer and the
/// page script. Every page goes through here.
pub fn render_page(config: &SiteConfig, seo_meta: &str, body_html: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    {seo_meta}
    <style>
        {base_css}
    </style>
</head>
<body data-video-threshold="{threshold}" data-copied-ms="{copied_ms}">
    <main class="page">
        {body_html}
    </main>
    {footer}
    <script>{portfolio_js}</script>
</body>
</html>"#,
        seo_meta = seo_meta,
        base_css = DEFAULT_CSS,
        threshold = config.video_threshold,
        copied_ms = COPIED_FOR.as_millis(),
        body_html = body_html,
        footer = build_footer(config),
        portfolio_js = PORTFOLIO_JS,
    )
}

/// Terminal not-found page with a way back home.
pub fn render_not_found(config: &SiteConfig, message: &str) -> String {
    let meta = crate::seo::build_meta(config, Some("Not found"), None, "/");
    let body = format!(
        r#"<div class="error-page">
    <h1>404</h1>
    <p>{}</p>
    <a class="btn btn-primary" href="/">Return Home</a>
</div>"#,
        html_escape(message)
    );
    render_page(config, &meta, &body)
}

fn build_footer(config: &SiteConfig) -> String {
    format!(
        r#"<footer class="site-footer">
    <div class="container footer-row">
        <p class="footer-text">Designed by {owner} &bull; {year}</p>
        {social}
    </div>
</footer>"#,
        owner = html_escape(&config.owner_name),
        year = chrono::Utc::now().format("%Y"),
        social = build_social_links(config),
    )
}

/// LinkedIn and GitHub open in a new browsing context; the mail link and the
/// copy button stay on the page.
fn build_social_links(config: &SiteConfig) -> String {
    // (url, label, icon_svg)
    let external: &[(&str, &str, &str)] = &[
        (config.linkedin_url.as_str(), "LinkedIn",
         r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/><rect x="2" y="9" width="4" height="12"/><circle cx="4" cy="4" r="2"/></svg>"#),
        (config.github_url.as_str(), "GitHub",
         r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><path d="M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22"/></svg>"#),
    ];

    let mut html = String::from("<div class=\"social-links\">");
    for (url, label, icon) in external {
        if url.is_empty() {
            continue;
        }
        html.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" aria-label=\"{}\">{}</a>\n",
            html_escape(url),
            label,
            icon
        ));
    }

    if !config.email.is_empty() {
        let email = html_escape(&config.email);
        html.push_str(&format!(
            "<a href=\"mailto:{email}\" aria-label=\"Email\"><svg width=\"20\" height=\"20\" viewBox=\"0 0 24 24\" fill=\"none\" stroke=\"currentColor\" stroke-width=\"2\"><rect x=\"2\" y=\"4\" width=\"20\" height=\"16\" rx=\"2\"/><path d=\"m22 7-10 6L2 7\"/></svg></a>\n\
             <button type=\"button\" class=\"copy-email\" data-email=\"{email}\" data-copied=\"false\" data-label=\"{label}\" data-copied-label=\"{copied}\"><span class=\"copy-label\">{label}</span></button>\n",
            email = email,
            label = COPY_LABEL,
            copied = COPIED_LABEL,
        ));
    }
    html.push_str("</div>");
    html
}

/// Percent-encode a root-relative path for use in `src`/`href`, keeping `/`.
pub fn encode_path(s: &str) -> String {
    let mut result = String::with_capacity(s.len() * 2);
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b'/' => {
                result.push(b as char);
            }
            _ => {
                result.push_str(&format!("%{:02X}", b));
            }
        }
    }
    result
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const PORTFOLIO_JS: &str = r#"
(function() {
    const b = document.body.dataset;
    const threshold = parseFloat(b.videoThreshold) || 0.1;
    const copiedMs = parseInt(b.copiedMs, 10) || 2000;

    // ── Lazy videos ──
    function mountVideo(box) {
        var spinner = box.querySelector('.video-spinner');
        var video = document.createElement('video');
        video.className = 'lazy-video-el is-loading';
        video.loop = true;
        video.muted = true;
        video.playsInline = true;
        video.preload = 'metadata';
        var source = document.createElement('source');
        source.src = box.dataset.src;
        source.type = 'video/mp4';
        video.appendChild(source);

        function loading(on) {
            if (spinner) spinner.hidden = !on;
            video.classList.toggle('is-loading', on);
            if (box.dataset.phase !== 'paused') box.dataset.phase = on ? 'loading' : 'ready';
        }
        video.addEventListener('loadstart', function() { loading(true); });
        video.addEventListener('waiting', function() { loading(true); });
        video.addEventListener('canplay', function() { loading(false); });
        video.addEventListener('playing', function() { loading(false); });

        box.appendChild(video);
        box.dataset.phase = 'loading';
        return video;
    }

    function tryPlay(video) {
        if (video.controls) return;
        video.muted = true;
        var p = video.play();
        if (p !== undefined) {
            p.catch(function(err) {
                console.warn('Autoplay was prevented:', err);
                video.controls = true;
            });
        }
    }

    var players = document.querySelectorAll('.lazy-video');
    if (players.length && 'IntersectionObserver' in window) {
        var obs = new IntersectionObserver(function(entries) {
            entries.forEach(function(entry) {
                var box = entry.target;
                var video = box.querySelector('video');
                if (!video) {
                    // nothing is fetched until the threshold is crossed
                    if (entry.isIntersecting && entry.intersectionRatio >= threshold) {
                        tryPlay(mountVideo(box));
                    }
                } else if (entry.isIntersecting) {
                    box.dataset.phase = video.classList.contains('is-loading') ? 'loading' : 'ready';
                    tryPlay(video);
                } else {
                    video.pause();
                    box.dataset.phase = 'paused';
                }
            });
        }, { threshold: [0, threshold] });
        players.forEach(function(el) { obs.observe(el); });
        window.addEventListener('pagehide', function() { obs.disconnect(); });
    } else {
        players.forEach(function(el) { tryPlay(mountVideo(el)); });
    }

    // ── Lightbox ──
    var overlay = document.querySelector('.lightbox-overlay');

    function enlarged(src, kind, alt) {
        var el;
        if (kind === 'document') {
            el = document.createElement('iframe');
            el.className = 'lb-document';
            el.title = alt;
        } else {
            el = document.createElement('img');
            el.className = 'lb-image';
            el.alt = 'Fullscreen Document';
        }
        el.src = src;
        return el;
    }

    function close() {
        if (!overlay) return;
        overlay.classList.remove('active');
        overlay.querySelector('.lb-content').innerHTML = '';
        document.body.style.overflow = '';
        if (location.search.indexOf('view=') !== -1) {
            history.replaceState(null, '', location.pathname);
        }
    }

    function wire(el) {
        el.querySelectorAll('.lb-backdrop, .lb-close').forEach(function(c) {
            c.addEventListener('click', function(e) { e.preventDefault(); close(); });
        });
        el.querySelector('.lb-content').addEventListener('click', function(e) { e.stopPropagation(); });
    }

    function open(src, kind, alt) {
        if (!overlay) {
            overlay = document.createElement('div');
            overlay.className = 'lightbox-overlay';
            overlay.innerHTML =
                '<a class="lb-backdrop" href="' + location.pathname + '" aria-label="Close"></a>' +
                '<a class="lb-close" href="' + location.pathname + '" aria-label="Close fullscreen view">&times;</a>' +
                '<div class="lb-content"></div>';
            document.body.appendChild(overlay);
            wire(overlay);
        }
        var content = overlay.querySelector('.lb-content');
        content.innerHTML = '';
        content.appendChild(enlarged(src, kind, alt));
        overlay.classList.add('active');
        document.body.style.overflow = 'hidden';
    }

    if (overlay) wire(overlay);

    document.querySelectorAll('.lightbox-trigger').forEach(function(link) {
        link.addEventListener('click', function(e) {
            e.preventDefault();
            open(link.dataset.src, link.dataset.kind, link.dataset.alt || '');
        });
    });

    document.addEventListener('keydown', function(e) {
        if (e.key === 'Escape' && overlay && overlay.classList.contains('active')) close();
    });

    // ── Copy email ──
    var copyBtn = document.querySelector('.copy-email');
    if (copyBtn) {
        var label = copyBtn.querySelector('.copy-label');
        var timer = null;
        copyBtn.addEventListener('click', function() {
            if (!navigator.clipboard) {
                console.warn('Failed to copy email: clipboard unavailable');
                return;
            }
            navigator.clipboard.writeText(copyBtn.dataset.email).then(function() {
                copyBtn.dataset.copied = 'true';
                label.textContent = copyBtn.dataset.copiedLabel;
                clearTimeout(timer);
                timer = setTimeout(function() {
                    copyBtn.dataset.copied = 'false';
                    label.textContent = copyBtn.dataset.label;
                }, copiedMs);
            }).catch(function(err) {
                console.warn('Failed to copy email:', err);
            });
        });
    }
})();
"#;

const DEFAULT_CSS: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }

:root {
    --bg: #0b0d12;
    --card: #12151c;
    --muted: #1b1f29;
    --border: #262b37;
    --fg: #e8eaf0;
    --fg-muted: #9aa1b2;
    --primary: #4f8cff;
    --primary-fg: #ffffff;
}

body {
    background: var(--bg);
    color: var(--fg);
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
    line-height: 1.6;
    min-height: 100vh;
}

a { color: inherit; text-decoration: none; }
.container { max-width: 1200px; margin: 0 auto; padding: 0 16px; }

.btn {
    display: inline-flex; align-items: center; justify-content: center; gap: 8px;
    padding: 10px 18px; border-radius: 8px; font-weight: 500; cursor: pointer;
    border: 1px solid transparent; transition: background .2s, color .2s;
}
.btn-primary { background: var(--primary); color: var(--primary-fg); }
.btn-primary:hover { opacity: .9; }
.btn-ghost { color: var(--fg-muted); }
.btn-ghost:hover { color: var(--fg); background: var(--muted); }
.btn-block { width: 100%; }

.badges { display: flex; flex-wrap: wrap; gap: 8px; margin-bottom: 16px; }
.badge {
    font-size: 12px; padding: 2px 10px; border-radius: 999px;
    background: rgba(79,140,255,.1); color: var(--primary); border: 1px solid rgba(79,140,255,.2);
}

/* Hero */
.hero { max-width: 1200px; margin: 0 auto; padding: 96px 16px 48px; }
.hero h1 { font-size: clamp(2.25rem, 6vw, 4.5rem); font-weight: 700; margin-bottom: 16px; }
.hero-tagline { font-size: clamp(1.25rem, 3vw, 1.875rem); color: var(--primary); font-weight: 500; margin-bottom: 24px; }
.hero-bio { color: var(--fg-muted); max-width: 42rem; font-size: 1.1rem; }

/* Gallery */
.gallery { max-width: 1200px; margin: 0 auto; padding: 48px 16px; }
.section-toggle { display: inline-flex; gap: 4px; padding: 4px; background: var(--muted); border-radius: 10px; margin-bottom: 32px; }
.toggle-btn { padding: 8px 18px; border-radius: 8px; color: var(--fg-muted); font-weight: 500; }
.toggle-btn.active { background: var(--primary); color: var(--primary-fg); }
.gallery h2 { font-size: clamp(1.875rem, 4vw, 2.25rem); font-weight: 700; margin-bottom: 48px; }
.card-grid { display: grid; grid-template-columns: 1fr; gap: 32px; }
@media (min-width: 1024px) { .card-grid { grid-template-columns: 1fr 1fr; } }
.card {
    display: flex; flex-direction: column; height: 100%; padding: 24px;
    background: var(--card); border: 1px solid var(--border); border-radius: 12px; transition: border-color .2s;
}
.card:hover { border-color: rgba(79,140,255,.5); }
.card-title { font-size: 1.5rem; font-weight: 700; margin-bottom: 16px; }
.card-summary { margin-bottom: 16px; }
.card-action { margin-top: auto; }

/* Media */
.media-frame {
    position: relative; display: block; width: 100%; aspect-ratio: 16 / 9;
    background: var(--muted); border: 1px solid var(--border); border-radius: 8px; overflow: hidden; margin-bottom: 16px;
}
.media-frame.document-frame { aspect-ratio: 4 / 3; cursor: pointer; }
.media-frame img { width: 100%; height: 100%; object-fit: cover; display: block; }
.media-frame iframe.doc-preview { width: 100%; height: 100%; border: none; pointer-events: none; }
.lightbox-trigger { cursor: pointer; }
.lightbox-trigger:hover img, .lightbox-trigger:hover iframe { transform: scale(1.05); opacity: .9; transition: all .3s; }

/* Lazy video */
.lazy-video { margin-bottom: 0; }
.video-spinner { position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; background: var(--muted); z-index: 10; }
.video-spinner[hidden] { display: none; }
.spinner { width: 32px; height: 32px; border: 3px solid rgba(79,140,255,.25); border-top-color: var(--primary); border-radius: 50%; animation: spin 1s linear infinite; }
@keyframes spin { to { transform: rotate(360deg); } }
.lazy-video-el { width: 100%; height: 100%; object-fit: cover; transition: opacity .5s; opacity: 1; }
.lazy-video-el.is-loading { opacity: 0; }

/* Detail */
.back-bar { padding: 24px 16px; max-width: 1200px; margin: 0 auto; }
.detail { max-width: 56rem; margin: 0 auto; padding: 0 16px 96px; }
.detail h1 { font-size: clamp(1.875rem, 5vw, 3rem); font-weight: 700; margin-bottom: 24px; }
.detail h2 { font-size: 1.5rem; font-weight: 700; margin-bottom: 24px; }
.prose { font-size: 1.125rem; margin-bottom: 48px; }
.detail-section { margin-bottom: 48px; }
.media-grid { display: grid; grid-template-columns: 1fr; gap: 16px; }
@media (min-width: 768px) { .media-grid { grid-template-columns: 1fr 1fr; } }
.doc-label { display: flex; align-items: center; gap: 8px; font-weight: 500; margin-bottom: 12px; }
.bullet-card { background: var(--card); border: 1px solid var(--border); border-radius: 12px; padding: 32px; margin-bottom: 48px; }
.bullets { list-style: none; }
.bullets li { position: relative; padding-left: 24px; margin-bottom: 12px; }
.bullets li::before { content: "\2022"; position: absolute; left: 0; color: var(--primary); font-size: 1.25rem; line-height: 1.4; }

/* Lightbox */
.lightbox-overlay { display: none; position: fixed; inset: 0; z-index: 50; align-items: center; justify-content: center; padding: 16px; }
.lightbox-overlay.active { display: flex; }
.lb-backdrop { position: absolute; inset: 0; background: rgba(11,13,18,.95); backdrop-filter: blur(4px); }
.lb-close {
    position: absolute; top: 24px; right: 24px; z-index: 52; width: 40px; height: 40px;
    display: flex; align-items: center; justify-content: center; font-size: 24px;
    background: var(--muted); border-radius: 50%;
}
.lb-close:hover { background: var(--primary); color: var(--primary-fg); }
.lb-content { position: relative; z-index: 51; }
.lb-image { max-width: 100%; max-height: 90vh; object-fit: contain; border-radius: 8px; background: #fff; }
.lb-document { width: 90vw; height: 90vh; max-width: 64rem; border: 1px solid var(--border); border-radius: 8px; background: #fff; }

/* Footer */
.site-footer { border-top: 1px solid var(--border); margin-top: 64px; padding: 32px 0; }
.footer-row { display: flex; flex-wrap: wrap; justify-content: space-between; align-items: center; gap: 16px; }
.footer-text { font-size: 14px; color: var(--fg-muted); }
.social-links { display: flex; align-items: center; gap: 24px; }
.social-links a { color: var(--fg-muted); transition: color .2s; }
.social-links a:hover { color: var(--primary); }
.copy-email { font-size: 13px; padding: 4px 10px; border-radius: 6px; border: 1px solid var(--border); background: transparent; color: var(--fg-muted); cursor: pointer; }
.copy-email[data-copied="true"] { color: var(--primary); border-color: var(--primary); }

/* Error page */
.error-page { min-height: 70vh; display: flex; flex-direction: column; align-items: center; justify-content: center; text-align: center; padding: 16px; }
.error-page h1 { font-size: 3.75rem; font-weight: 700; margin-bottom: 16px; }
.error-page p { font-size: 1.25rem; color: var(--fg-muted); margin-bottom: 32px; }
"#;
