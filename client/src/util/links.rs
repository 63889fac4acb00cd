//! Outbound link formats and clipboard access.

#[cfg(test)]
#[path = "links_test.rs"]
mod links_test;

/// `wa.me` deep link. Non-digits are dropped from the number.
#[must_use]
pub fn whatsapp_link(number: &str) -> String {
    let digits = number.chars().filter(char::is_ascii_digit).collect::<String>();
    format!("https://wa.me/{digits}")
}

#[must_use]
pub fn mailto_link(email: &str) -> String {
    format!("mailto:{email}")
}

/// `tel:` link. Keeps a leading `+` and the digits.
#[must_use]
pub fn tel_link(phone: &str) -> String {
    let number = phone
        .chars()
        .enumerate()
        .filter(|(i, c)| c.is_ascii_digit() || (*i == 0 && *c == '+'))
        .map(|(_, c)| c)
        .collect::<String>();
    format!("tel:{number}")
}

/// Open `url` in a new tab.
pub fn open_in_new_tab(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.open_with_url_and_target(url, "_blank") {
                log::warn!("failed to open {url}: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}

/// Write `text` to the clipboard. Returns whether a clipboard was available.
pub fn copy_to_clipboard(text: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(clipboard) = web_sys::window().and_then(|w| w.navigator().clipboard()) else {
            return false;
        };
        // The returned promise only reports permission failures; nothing to await.
        drop(clipboard.write_text(text));
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        false
    }
}
