/// Keyword category: any trigger found in the lowercased input selects `response`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub triggers: &'static [&'static str],
    pub response: &'static str,
}

impl Category {
    /// Substring containment, not whole-word: "react" matches "reactive".
    /// `normalized` must already be lowercase.
    pub fn matches(&self, normalized: &str) -> bool {
        self.triggers.iter().any(|&trigger| normalized.contains(trigger))
    }
}

/// Declaration order is the only tie-break: the first matching category wins.
pub const CATEGORY_TABLE: &[Category] = &[
    Category {
        name: "greetings",
        triggers: &["hi", "hello", "hey", "asalam", "namaste"],
        response: "Hello! I am Mahad's AI. How can I assist you today?",
    },
    Category {
        name: "skills",
        triggers: &["skill", "expert", "tech", "language", "know", "react", "node", "tailwind"],
        response: "Mahad is a master of Full-Stack Development (React, Node.js, Tailwind).",
    },
    Category {
        name: "contact",
        triggers: &["contact", "whatsapp", "email", "number", "reach", "call", "talk"],
        response: "WA: +92 314 2253977 | Email: khanmahad768@gmail.com",
    },
    Category {
        name: "pricing",
        triggers: &["price", "cost", "budget", "hire", "money", "charge"],
        response: "Plans start at $499.",
    },
    Category {
        name: "about",
        triggers: &["who", "mahad", "you", "name", "experience", "work"],
        response: "I'm Mahad's virtual assistant. He has 5+ years of experience.",
    },
    Category {
        name: "mood",
        triggers: &["how are you", "kaise ho", "fine", "good"],
        response: "Doing great and ready to help! What are you building?",
    },
    Category {
        name: "thanks",
        triggers: &["thank", "shukriya", "nice", "awesome"],
        response: "You're welcome! Reach out any time.",
    },
];

pub const FALLBACK_RESPONSE: &str = "Interesting! Mahad can build exactly what you need.";

/// First category in table order whose triggers occur in the input.
pub fn classify(utterance: &str) -> Option<&'static Category> {
    let normalized = utterance.to_lowercase();
    CATEGORY_TABLE
        .iter()
        .find(|category| category.matches(&normalized))
}

/// Maps any input to exactly one canned response. Never fails; unmatched
/// input (including the empty string) gets [`FALLBACK_RESPONSE`].
pub fn select_response(utterance: &str) -> String {
    classify(utterance)
        .map(|category| category.response)
        .unwrap_or(FALLBACK_RESPONSE)
        .to_string()
}

/// Local rule-based AI for basic answers
pub struct LocalAI;

impl LocalAI {
    pub fn get_response(user_input: &str) -> String {
        let response = select_response(user_input);
        match classify(user_input) {
            Some(category) => log::debug!("🧭 Local rules matched '{}'", category.name),
            None => log::debug!("🧭 Local rules found no category, using fallback"),
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_of(name: &str) -> String {
        CATEGORY_TABLE
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.response.to_string())
            .unwrap()
    }

    #[test]
    fn test_greeting_is_case_insensitive() {
        assert_eq!(select_response("HELLO"), select_response("hello"));
        assert_eq!(select_response("Hello"), response_of("greetings"));
    }

    #[test]
    fn test_pricing_matches_cost() {
        assert_eq!(select_response("What's the cost?"), response_of("pricing"));
        assert_eq!(select_response("Tell me your budget"), response_of("pricing"));
    }

    #[test]
    fn test_earlier_category_wins_tie() {
        assert_eq!(
            select_response("hello, what are your skills"),
            response_of("greetings")
        );
        // "hire" also contains the greeting trigger "hi".
        assert_eq!(select_response("Can I hire Mahad?"), response_of("greetings"));
    }

    #[test]
    fn test_substring_match_inside_words() {
        assert_eq!(select_response("reactive dashboards"), response_of("skills"));
        assert_eq!(classify("NODEJS").map(|c| c.name), Some("skills"));
    }

    #[test]
    fn test_contact_and_about() {
        assert_eq!(select_response("email please"), response_of("contact"));
        assert_eq!(select_response("who are you"), response_of("about"));
    }

    #[test]
    fn test_later_categories_reachable() {
        assert_eq!(classify("kaise ho").map(|c| c.name), Some("mood"));
        assert_eq!(classify("awesome").map(|c| c.name), Some("thanks"));
        // "you" is an about trigger, declared before mood.
        assert_eq!(classify("how are you").map(|c| c.name), Some("about"));
    }

    #[test]
    fn test_no_match_returns_fallback() {
        assert_eq!(select_response("xyzzy plugh"), FALLBACK_RESPONSE);
        assert!(classify("xyzzy plugh").is_none());
    }

    #[test]
    fn test_empty_input_returns_fallback() {
        assert_eq!(select_response(""), FALLBACK_RESPONSE);
    }

    #[test]
    fn test_deterministic_and_total() {
        for input in ["hi", "xyzzy", "What's the cost?", "ΣΑΣ", "🙂", "   padded   "] {
            let first = select_response(input);
            assert!(!first.is_empty());
            assert_eq!(first, select_response(input));
        }
    }

    #[test]
    fn test_table_triggers_are_lowercase() {
        for category in CATEGORY_TABLE {
            assert!(!category.triggers.is_empty());
            for trigger in category.triggers {
                assert_eq!(*trigger, trigger.to_lowercase());
            }
        }
    }
}
