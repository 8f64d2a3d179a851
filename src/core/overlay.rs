use std::fmt;

/// 目前顯示的浮層。購物車和結帳畫面互斥，由單一列舉值保證。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    Closed,
    CartOpen,
    CheckoutOpen,
}

impl Overlay {
    pub fn is_cart_open(self) -> bool {
        self == Overlay::CartOpen
    }

    pub fn is_checkout_open(self) -> bool {
        self == Overlay::CheckoutOpen
    }

    /// Closed / CheckoutOpen -> CartOpen. Returns whether the state changed.
    pub fn open_cart(&mut self) -> bool {
        self.transition(Overlay::CartOpen, |s| {
            matches!(s, Overlay::Closed | Overlay::CheckoutOpen)
        })
    }

    /// CartOpen -> Closed.
    pub fn close_cart(&mut self) -> bool {
        self.transition(Overlay::Closed, Overlay::is_cart_open)
    }

    /// CartOpen -> CheckoutOpen. The cart is closed by the same step.
    pub fn initiate_checkout(&mut self) -> bool {
        self.transition(Overlay::CheckoutOpen, Overlay::is_cart_open)
    }

    /// CheckoutOpen -> Closed.
    pub fn close_checkout(&mut self) -> bool {
        self.transition(Overlay::Closed, Overlay::is_checkout_open)
    }

    fn transition(&mut self, to: Overlay, allowed: impl Fn(Overlay) -> bool) -> bool {
        let from = *self;
        if !allowed(from) {
            tracing::debug!("Ignoring overlay transition {} -> {}", from, to);
            return false;
        }
        *self = to;
        tracing::debug!("Overlay {} -> {}", from, to);
        true
    }
}

impl fmt::Display for Overlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Overlay::Closed => "closed",
            Overlay::CartOpen => "cart",
            Overlay::CheckoutOpen => "checkout",
        };
        f.write_str(name)
    }
}
