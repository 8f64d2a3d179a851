use crate::core::cart::CartStore;
use std::fmt::Write;

pub const EMPTY_TITLE: &str = "Nothing here yet!";
pub const EMPTY_HINT: &str = "Add some services and let's make magic happen";
pub const NOTES_PLACEHOLDER: &str = "Tell us what you're dreaming up for this service...";
pub const CHECKOUT_LABEL: &str = "Let's Talk Business!";
pub const PRICING_HINT: &str = "We'll cook up custom pricing just for you";

/// `ai_automation` -> `AI AUTOMATION`. Only the first underscore is replaced.
pub fn category_label(category: &str) -> String {
    category.replacen('_', " ", 1).to_uppercase()
}

pub fn summary_line(count: usize) -> String {
    let noun = if count == 1 {
        "awesome service"
    } else {
        "awesome services"
    };
    format!("{} {} ready to rock", count, noun)
}

/// 購物車抽屜的文字版
pub fn render(cart: &CartStore) -> String {
    let mut out = String::new();
    let count = cart.cart_count();

    if count > 0 {
        let _ = writeln!(out, "Your Wishlist ({})", count);
    } else {
        let _ = writeln!(out, "Your Wishlist");
    }
    let _ = writeln!(out, "{}", "-".repeat(40));

    if cart.is_empty() {
        let _ = writeln!(out, "{}", EMPTY_TITLE);
        let _ = writeln!(out, "{}", EMPTY_HINT);
        return out;
    }

    for (index, item) in cart.items().iter().enumerate() {
        let _ = writeln!(out, "{}. {}", index + 1, item.service.name);
        let _ = writeln!(out, "   {}", category_label(&item.service.category));
        let _ = writeln!(out, "   id: {}", item.id);
        if item.notes.is_empty() {
            let _ = writeln!(out, "   notes: ({})", NOTES_PLACEHOLDER);
        } else {
            let _ = writeln!(out, "   notes: {}", item.notes);
        }
    }

    let _ = writeln!(out, "{}", "-".repeat(40));
    let _ = writeln!(out, "{}", summary_line(count));
    let _ = writeln!(out, "[checkout] {}", CHECKOUT_LABEL);
    let _ = writeln!(out, "{}", PRICING_HINT);
    out
}
