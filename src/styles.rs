//! Style fragments injected at attach time.
//!
//! The static stylesheet covers layout; these blocks back the runtime
//! behaviors (particle fall, entrance slide, condensed header, open menu,
//! ripple, dark theme). Each block lands in `<head>` under a stable id and
//! is skipped if that id already exists, so a second attach never doubles
//! the rules.

use wasm_bindgen::JsValue;
use web_sys::Document;

/// Keyframes and state classes for the scroll and menu behaviors.
pub const BASE_EFFECTS: &str = "
    @keyframes floatDown {
        0% {
            transform: translateY(0) rotate(0deg);
            opacity: 0.7;
        }
        100% {
            transform: translateY(100vh) rotate(360deg);
            opacity: 0;
        }
    }

    .animate-in {
        animation: slideInUp 0.6s ease-out forwards;
    }

    @keyframes slideInUp {
        from {
            opacity: 0;
            transform: translateY(30px);
        }
        to {
            opacity: 1;
            transform: translateY(0);
        }
    }

    .header.scrolled {
        background: rgba(255, 255, 255, 0.98);
        box-shadow: 0 2px 20px rgba(0, 0, 0, 0.1);
    }

    .nav-menu.active {
        display: flex;
        flex-direction: column;
        position: absolute;
        top: 100%;
        left: 0;
        right: 0;
        background: white;
        padding: 20px;
        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
    }

    .nav-toggle.active span:nth-child(1) {
        transform: rotate(45deg) translate(5px, 5px);
    }

    .nav-toggle.active span:nth-child(2) {
        opacity: 0;
    }

    .nav-toggle.active span:nth-child(3) {
        transform: rotate(-45deg) translate(7px, -6px);
    }

    @media (max-width: 768px) {
        .nav-menu {
            display: none;
        }
    }
";

/// Ripple span styling and its expansion keyframes.
pub const RIPPLE_EFFECTS: &str = "
    .btn {
        position: relative;
        overflow: hidden;
    }

    .ripple {
        position: absolute;
        border-radius: 50%;
        background: rgba(255, 255, 255, 0.3);
        transform: scale(0);
        animation: ripple 0.6s linear;
        pointer-events: none;
    }

    @keyframes ripple {
        to {
            transform: scale(4);
            opacity: 0;
        }
    }
";

/// Dark color scheme, activated by the `dark-theme` class on `<body>`.
pub const DARK_THEME: &str = "
    .dark-theme {
        background-color: #1a1a1a;
        color: #e0e0e0;
    }

    .dark-theme .header {
        background: rgba(26, 26, 26, 0.95);
        border-bottom-color: #333;
    }

    .dark-theme .use-case-card,
    .dark-theme .topic-card,
    .dark-theme .example-card {
        background: #2a2a2a;
        border-color: #333;
        color: #e0e0e0;
    }

    .dark-theme .footer {
        background: #0a0a0a;
    }
";

/// Inline style for the lazily created scroll progress bar.
pub const PROGRESS_BAR_STYLE: &str = "position: fixed; top: 0; left: 0; \
    width: 0%; height: 3px; \
    background: linear-gradient(90deg, #627eea, #764ba2); \
    z-index: 9999; transition: width 0.1s ease";

/// Add every style block to `<head>`, skipping ids already present.
///
/// # Errors
///
/// Fails only if the document refuses to create or append a `<style>`
/// element.
pub fn inject(document: &Document) -> Result<(), JsValue> {
    for (id, css) in [
        ("pagefx-base", BASE_EFFECTS),
        ("pagefx-ripple", RIPPLE_EFFECTS),
        ("pagefx-dark", DARK_THEME),
    ] {
        inject_block(document, id, css)?;
    }
    Ok(())
}

fn inject_block(document: &Document, id: &str, css: &str) -> Result<(), JsValue> {
    if document.get_element_by_id(id).is_some() {
        return Ok(());
    }
    let Some(head) = document.head() else {
        return Ok(());
    };
    let style = document.create_element("style")?;
    style.set_id(id);
    style.set_text_content(Some(css));
    head.append_child(&style)?;
    Ok(())
}
