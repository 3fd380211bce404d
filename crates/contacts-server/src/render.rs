//! HTML rendering for the contacts page and its htmx fragments.
//!
//! The page shell is embedded with `include_str!` and filled by placeholder
//! substitution. Fragments are built directly. Every user-supplied string
//! passes through [`escape`] before it reaches the output.

use std::fmt::Write;

use contacts_core::Contact;

use crate::schema::contacts::FormData;

const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");

/// Renders the full page: creation form followed by the contact list.
///
/// `GET /`
pub fn index_page(contacts: &[Contact], form: &FormData) -> String {
    // Split once per placeholder so user text that happens to spell a
    // placeholder is never substituted.
    let (head, rest) = INDEX_TEMPLATE
        .split_once("__FORM__")
        .unwrap_or((INDEX_TEMPLATE, ""));
    let (middle, tail) = rest.split_once("__CONTACTS__").unwrap_or((rest, ""));

    let mut html = String::with_capacity(INDEX_TEMPLATE.len() + 256 * (contacts.len() + 1));
    html.push_str(head);
    html.push_str(&form_fragment(form));
    html.push_str(middle);
    html.push_str(&contacts_fragment(contacts));
    html.push_str(tail);
    html
}

/// Renders the creation form, pre-filled from `form`.
///
/// The form replaces itself (`outerHTML`) with whatever the server returns.
pub fn form_fragment(form: &FormData) -> String {
    let mut html = String::from(
        r#"<form id="contact-form" hx-post="/contacts" hx-swap="outerHTML">"#,
    );
    for (field, label) in [("name", "Name"), ("email", "Email")] {
        let _ = write!(
            html,
            r#"<label>{label} <input type="text" name="{field}" value="{value}"></label>"#,
            value = escape(form.value(field)),
        );
        if let Some(message) = form.error(field) {
            let _ = write!(
                html,
                r#"<div class="error" data-field="{field}">{}</div>"#,
                escape(message)
            );
        }
    }
    html.push_str(r#"<button type="submit">Create Contact</button></form>"#);
    html
}

/// Renders the `#contacts` container with every contact in order.
pub fn contacts_fragment(contacts: &[Contact]) -> String {
    let mut html = String::from(r#"<div id="contacts" class="contacts">"#);
    for contact in contacts {
        html.push_str(&contact_fragment(contact));
    }
    html.push_str("</div>");
    html
}

/// Renders one contact row with its delete control.
///
/// The delete button shows a loading indicator while the request is in
/// flight and swaps the row out when it returns.
pub fn contact_fragment(contact: &Contact) -> String {
    let id = contact.id;
    format!(
        concat!(
            r#"<div class="contact" id="contact-{id}">"#,
            r##"<div class="delete-btn" hx-delete="/contacts/{id}" hx-target="#contact-{id}" "##,
            r##"hx-swap="outerHTML swap:500ms" hx-indicator="#ci-{id}">&#x2715;</div>"##,
            r#"<span>Name: {name}</span> <span>Email: {email}</span>"#,
            r#"<div id="ci-{id}" class="htmx-indicator">"#,
            r#"<img src="/images/bars.svg" alt="loading" class="loading"></div>"#,
            "</div>",
        ),
        id = id,
        name = escape(&contact.name),
        email = escape(&contact.email),
    )
}

/// Renders a contact row for out-of-band append to `#contacts`.
pub fn oob_contact_fragment(contact: &Contact) -> String {
    format!(
        r##"<div hx-swap-oob="beforeend:#contacts">{}</div>"##,
        contact_fragment(contact)
    )
}

/// Escapes text for use in HTML content and quoted attribute values.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
