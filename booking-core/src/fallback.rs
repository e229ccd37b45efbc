/// Keyword-routed fallback answering
/// Used when no completion-service credential is configured. The trigger
/// substrings change behaviour, not just availability, so they are fixed.

use crate::catalog::{routes_by_provider, Document, RouteRecord};

/// Fixed reply for queries outside the keyword classes.
pub const GENERIC_FALLBACK: &str = "I can help you with information about bus routes, providers, \
     bookings, and contact details. Please note: The GROQ API key is not configured, so I'm \
     providing basic information. What would you like to know?";

/// The deterministic answer classes the fallback router can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackIntent {
    /// Query mentions contact, phone or email.
    Contact,
    /// Query mentions district, route or serve.
    Routes,
    /// Anything else.
    Generic,
}

/// Route a lowercased query to its fallback answer class.
pub fn classify_query(query: &str) -> FallbackIntent {
    let query_lower = query.to_lowercase();

    if query_lower.contains("contact")
        || query_lower.contains("phone")
        || query_lower.contains("email")
    {
        FallbackIntent::Contact
    } else if query_lower.contains("district")
        || query_lower.contains("route")
        || query_lower.contains("serve")
    {
        FallbackIntent::Routes
    } else {
        FallbackIntent::Generic
    }
}

/// Extract contact lines from every document carrying the
/// "Contact Information:" marker, one "<provider>: <line>" entry per match.
pub fn format_contact_lines(documents: &[Document]) -> String {
    let mut response = String::from("Here are the contact details I have:\n\n");
    for doc in documents {
        if !doc.content.contains("Contact Information:") {
            continue;
        }
        for line in doc.content.lines() {
            if line.contains("Contact Information:") || line.contains("Email:") {
                response.push_str(&format!("{}: {}\n", doc.provider_name, line.trim()));
            }
        }
    }
    response
}

/// Emit one "<provider>: <comma-joined districts>" line per provider.
pub fn format_route_summary(routes: &[RouteRecord]) -> String {
    let mut response = String::from("Here are the available routes:\n\n");
    for (provider, districts) in routes_by_provider(routes) {
        response.push_str(&format!("{}: {}\n", provider, districts.join(", ")));
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: i64, provider: &str, content: &str) -> Document {
        Document {
            id,
            provider_name: provider.to_string(),
            content: content.to_string(),
        }
    }

    fn route(id: i64, provider: &str, district: &str) -> RouteRecord {
        RouteRecord {
            id,
            provider_id: 0,
            district_id: 0,
            provider_name: provider.to_string(),
            district_name: district.to_string(),
        }
    }

    #[test]
    fn test_contact_keywords_route_to_contact() {
        assert_eq!(classify_query("How do I CONTACT Hanif?"), FallbackIntent::Contact);
        assert_eq!(classify_query("phone number please"), FallbackIntent::Contact);
        assert_eq!(classify_query("what's their email"), FallbackIntent::Contact);
    }

    #[test]
    fn test_route_keywords_route_to_routes() {
        assert_eq!(classify_query("which districts do you serve?"), FallbackIntent::Routes);
        assert_eq!(classify_query("show me the routes"), FallbackIntent::Routes);
    }

    #[test]
    fn test_unmatched_query_routes_to_generic() {
        assert_eq!(classify_query("hello there"), FallbackIntent::Generic);
    }

    #[test]
    fn test_contact_lines_one_entry_per_marked_document() {
        let docs = vec![
            doc(1, "Hanif", "About us.\nContact Information: 01700-000000\nEmail: info@hanif.example"),
            doc(2, "Green Line", "Luggage policy only, no markers here."),
            doc(3, "Ena", "Contact Information: 01800-111111"),
        ];

        let response = format_contact_lines(&docs);
        assert!(response.contains("Hanif: Contact Information: 01700-000000"));
        assert!(response.contains("Hanif: Email: info@hanif.example"));
        assert!(response.contains("Ena: Contact Information: 01800-111111"));
        assert!(!response.contains("Green Line"));
    }

    #[test]
    fn test_route_summary_lists_each_provider_once() {
        let routes = vec![
            route(1, "Hanif", "Dhaka"),
            route(2, "Hanif", "Sylhet"),
            route(3, "Green Line", "Dhaka"),
        ];

        let response = format_route_summary(&routes);
        assert!(response.contains("Hanif: Dhaka, Sylhet"));
        assert!(response.contains("Green Line: Dhaka"));
        assert_eq!(response.matches("Hanif:").count(), 1);
    }
}
