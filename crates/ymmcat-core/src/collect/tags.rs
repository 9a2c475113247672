use crate::model::Category;

/// Maximum number of tags kept per record.
pub const MAX_TAGS: usize = 6;

/// Topics naming the host application or just "plugin" carry no information.
fn is_descriptive_topic(topic: &str) -> bool {
    let lower = topic.to_lowercase();
    !lower.contains("ymm") && !lower.contains("yukkuri") && lower != "plugin"
}

/// Category label first, then descriptive topics in order; deduplicated, at most `MAX_TAGS`.
pub fn generate_tags(topics: &[String], category: Category) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    let candidates = std::iter::once(category.label().to_string()).chain(
        topics
            .iter()
            .filter(|t| is_descriptive_topic(t))
            .cloned(),
    );
    for tag in candidates {
        if tags.len() == MAX_TAGS {
            break;
        }
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}
