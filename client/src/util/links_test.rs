use super::*;

#[test]
fn whatsapp_link_keeps_digits_only() {
    assert_eq!(whatsapp_link("9127301592"), "https://wa.me/9127301592");
    assert_eq!(whatsapp_link("+91 91273 01592"), "https://wa.me/919127301592");
}

#[test]
fn mailto_link_prefixes_scheme() {
    assert_eq!(mailto_link("me@example.com"), "mailto:me@example.com");
}

#[test]
fn tel_link_keeps_leading_plus() {
    assert_eq!(tel_link("+91 9127301592"), "tel:+919127301592");
    assert_eq!(tel_link("(555) 010-0199"), "tel:5550100199");
    assert_eq!(tel_link("5+5"), "tel:55");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn clipboard_is_unavailable_off_browser() {
    assert!(!copy_to_clipboard("hello"));
}
