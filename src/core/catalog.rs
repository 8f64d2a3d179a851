use crate::domain::model::Service;
use std::collections::HashSet;
use std::fmt::Write;

/// 分類顯示順序；未列出的分類排在最前面，彼此維持出現順序
pub const CATEGORY_ORDER: [&str; 5] = [
    "creative",
    "marketing",
    "ai_automation",
    "web_development",
    "consulting",
];

pub fn category_display_name(category: &str) -> &str {
    match category {
        "creative" => "Creative & Production",
        "marketing" => "Marketing & Growth",
        "ai_automation" => "AI & Automation Suite",
        "web_development" => "Web & System Development",
        "consulting" => "Free Consultation",
        other => other,
    }
}

const BENEFITS_SHOWN: usize = 3;
const USE_CASES_SHOWN: usize = 2;

/// 未知分類為 0，已知分類從 1 開始
fn category_rank(category: &str) -> usize {
    CATEGORY_ORDER
        .iter()
        .position(|c| *c == category)
        .map_or(0, |index| index + 1)
}

#[derive(Debug, Clone)]
pub struct CategoryGroup<'a> {
    pub category: &'a str,
    pub services: Vec<&'a Service>,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    services: Vec<Service>,
}

impl Catalog {
    pub fn new(services: Vec<Service>) -> Self {
        Self { services }
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    pub fn find(&self, service_id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == service_id)
    }

    /// Services grouped by category; within a group the fetched order is kept.
    pub fn grouped(&self) -> Vec<CategoryGroup<'_>> {
        let mut groups: Vec<CategoryGroup<'_>> = Vec::new();
        for service in &self.services {
            match groups.iter_mut().find(|g| g.category == service.category) {
                Some(group) => group.services.push(service),
                None => groups.push(CategoryGroup {
                    category: &service.category,
                    services: vec![service],
                }),
            }
        }

        // 穩定排序：同為未知分類時保留第一次出現的順序
        groups.sort_by_key(|g| category_rank(g.category));
        groups
    }

    pub fn render(&self, added: &HashSet<&str>) -> String {
        let mut out = String::new();
        if self.services.is_empty() {
            let _ = writeln!(out, "No services available right now.");
            return out;
        }

        for group in self.grouped() {
            let _ = writeln!(out, "== {} ==", category_display_name(group.category));
            for service in group.services {
                let marker = if added.contains(service.id.as_str()) {
                    "[x]"
                } else {
                    "[ ]"
                };
                let _ = writeln!(out, "{} {}  ({})", marker, service.name, service.id);
                let blurb = if service.detailed_description.is_empty() {
                    &service.description
                } else {
                    &service.detailed_description
                };
                if !blurb.is_empty() {
                    let _ = writeln!(out, "      {}", blurb);
                }
                if !service.benefits.is_empty() {
                    let _ = writeln!(out, "      Key Benefits:");
                    for benefit in service.benefits.iter().take(BENEFITS_SHOWN) {
                        let _ = writeln!(out, "        - {}", benefit);
                    }
                }
                if !service.use_cases.is_empty() {
                    let _ = writeln!(out, "      Perfect For:");
                    for use_case in service.use_cases.iter().take(USE_CASES_SHOWN) {
                        let _ = writeln!(out, "        • {}", use_case);
                    }
                }
            }
            let _ = writeln!(out);
        }
        out
    }
}
