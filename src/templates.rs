//! Email content for the two messages each inquiry produces.
//!
//! HTML is rendered with `maud`, which escapes every interpolated value.
//! Plain-text alternatives are rendered alongside the HTML.

use crate::config::SiteProfile;
use crate::domain::ServiceArea;
use crate::models::{Inquiry, OutboundEmail};
use chrono::{DateTime, Utc};
use maud::{html, Markup};

pub const ACKNOWLEDGEMENT_SUBJECT: &str = "Thank you for contacting Enercam Solar Roofs";

/// Subject line for the staff notification: `New <interest> inquiry from <name>`.
pub fn notification_subject(inquiry: &dyn Inquiry) -> String {
    let contact = inquiry.contact();
    format!("New {} inquiry from {}", contact.interest, contact.name)
}

/// Labelled rows for the notification, in display order. Phone only when given.
fn detail_rows(inquiry: &dyn Inquiry) -> Vec<(&'static str, String)> {
    let contact = inquiry.contact();

    let mut rows = vec![
        ("Name", contact.name.to_string()),
        ("Email", contact.email.to_string()),
    ];
    if let Some(phone) = &contact.phone {
        rows.push(("Phone", phone.clone()));
    }
    rows.push(("Location", contact.location.to_string()));
    rows.push(("Interest", contact.interest.to_string()));
    rows.extend(inquiry.extra_details());
    rows
}

fn notification_html(inquiry: &dyn Inquiry, rows: &[(&str, String)], received: &str) -> Markup {
    let contact = inquiry.contact();

    html! {
        div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;" {
            h2 { "New Contact Form Submission" }
            div style="background: #f9f9f9; padding: 20px; border-radius: 8px; margin: 20px 0;" {
                @for (label, value) in rows {
                    p { strong { (label) ":" } " " (value) }
                }
                p { strong { "Message:" } }
                div style="background: white; padding: 15px; border-radius: 4px; border-left: 4px solid #0ea5e9;" {
                    @for (i, line) in contact.message.lines().enumerate() {
                        @if i > 0 { br; }
                        (line)
                    }
                }
            }
            p style="color: #666; font-size: 14px;" {
                "This message was sent from the Enercam website contact form on " (received) "."
            }
        }
    }
}

/// Build the staff notification email.
pub fn notification(
    inquiry: &dyn Inquiry,
    from: &str,
    to: &str,
    received_at: DateTime<Utc>,
) -> OutboundEmail {
    let rows = detail_rows(inquiry);
    let received = received_at.format("%Y-%m-%d %H:%M UTC").to_string();

    let details: String = rows
        .iter()
        .map(|(label, value)| format!("{}: {}\n", label, value))
        .collect();
    let text = format!(
        "New Contact Form Submission\n\n{}\nMessage:\n{}\n\nSent from the Enercam website contact form on {}.\n",
        details,
        inquiry.contact().message,
        received
    );

    OutboundEmail {
        from: from.to_string(),
        to: vec![to.to_string()],
        subject: notification_subject(inquiry),
        html: notification_html(inquiry, &rows, &received).into_string(),
        text,
    }
}

fn acknowledgement_html(name: &str, site: &SiteProfile, products_url: &str, serving: &[&str]) -> Markup {
    html! {
        div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;" {
            h2 { "Thank You for Contacting Us" }
            div style="background: #f0f9ff; padding: 20px; border-radius: 8px; margin: 20px 0;" {
                p { "Hi " (name) "," }
                p {
                    "Thank you for reaching out to " (site.name)
                    ". We've received your message and one of our specialists will get back to you within 24 hours."
                }
                p { "In the meantime, feel free to explore our products and case studies on our website." }
            }
            div style="text-align: center; margin: 30px 0;" {
                a href=(products_url) style="background: #0ea5e9; color: white; padding: 12px 24px; text-decoration: none; border-radius: 6px; display: inline-block;" {
                    "Explore Our Products"
                }
            }
            hr style="border: none; border-top: 1px solid #eee; margin: 30px 0;";
            div style="color: #666; font-size: 14px;" {
                p { strong { (site.name) } }
                p { "Phone: " (site.phone) }
                p { "Email: " (site.info_email) }
                p { "Serving: " (serving.join(" • ")) }
            }
        }
    }
}

/// Build the acknowledgment sent back to the submitter.
pub fn acknowledgement(inquiry: &dyn Inquiry, from: &str, site: &SiteProfile) -> OutboundEmail {
    let contact = inquiry.contact();
    let products_url = format!("{}/products", site.url);
    let serving: Vec<&str> = ServiceArea::ALL
        .iter()
        .map(|area| area.short_name())
        .collect();

    let text = format!(
        "Hi {name},\n\n\
         Thank you for reaching out to {company}. We've received your message and one of our \
         specialists will get back to you within 24 hours.\n\n\
         In the meantime, explore our products: {products_url}\n\n\
         {company}\nPhone: {phone}\nEmail: {email}\nServing: {serving}\n",
        name = contact.name,
        company = site.name,
        products_url = products_url,
        phone = site.phone,
        email = site.info_email,
        serving = serving.join(" / "),
    );

    OutboundEmail {
        from: from.to_string(),
        to: vec![contact.email.to_string()],
        subject: ACKNOWLEDGEMENT_SUBJECT.to_string(),
        html: acknowledgement_html(contact.name.as_str(), site, &products_url, &serving)
            .into_string(),
        text,
    }
}
