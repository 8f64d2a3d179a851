use crate::core::catalog::Catalog;
use crate::core::drawer;
use crate::core::overlay::Overlay;
use crate::core::portfolio;
use crate::core::session::Session;
use crate::core::storefront::Storefront;
use crate::domain::model::{CartItemId, ContactDetails, PortfolioItem};
use crate::domain::ports::{ContentProvider, QuoteSink};
use crate::utils::error::{QuoteError, Result};
use std::io::Write;
use std::str::FromStr;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

pub const HELP: &str = "\
Commands:
  services                          list the service catalog
  add <service-id>                  add a service to your wishlist
  remove <item>                     remove an item (id or position)
  note <item> <text...>             replace the notes of an item
  cart                              open the wishlist
  close                             close the wishlist or checkout
  checkout                          continue from the wishlist to checkout
  submit <name...> <email> [company...] [-- message...]
                                    send the quote request
  home                              refresh the catalog, latest posts and featured work
  blog                              latest posts
  portfolio [category]              all work, optionally one category
  help                              this text
  quit                              leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Help,
    Services,
    Add(String),
    Remove(String),
    Note { item: String, text: String },
    Cart,
    Close,
    Checkout,
    Submit(ContactDetails),
    Blog,
    Portfolio(Option<String>),
    Home,
    Quit,
}

fn usage(message: &str) -> QuoteError {
    QuoteError::ValidationError {
        message: format!("usage: {}", message),
    }
}

const SUBMIT_USAGE: &str = "submit <name...> <email> [company...] [-- message...]";

/// `Jo Rivera jo@studio.io Rivera Studio -- launching in May`
///
/// 第一個含 `@` 的字是 email，前面是姓名，後面是公司；`--` 之後是留言。
fn parse_contact(rest: &str) -> Result<ContactDetails> {
    let words: Vec<&str> = rest.split_whitespace().collect();
    let (fields, message) = match words.iter().position(|w| *w == "--") {
        Some(dashes) => (&words[..dashes], words[dashes + 1..].join(" ")),
        None => (&words[..], String::new()),
    };

    let at = match fields.iter().position(|w| w.contains('@')) {
        Some(at) if at > 0 => at,
        _ => return Err(usage(SUBMIT_USAGE)),
    };

    let company = fields[at + 1..].join(" ");
    Ok(ContactDetails {
        name: fields[..at].join(" "),
        email: fields[at].to_string(),
        company: Some(company).filter(|c| !c.is_empty()),
        message: Some(message).filter(|m| !m.is_empty()),
    })
}

impl FromStr for ShellCommand {
    type Err = QuoteError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        let command = match name.to_ascii_lowercase().as_str() {
            "help" | "?" => ShellCommand::Help,
            "services" | "catalog" => ShellCommand::Services,
            "add" if !rest.is_empty() => ShellCommand::Add(rest.to_string()),
            "add" => return Err(usage("add <service-id>")),
            "remove" | "rm" if !rest.is_empty() => ShellCommand::Remove(rest.to_string()),
            "remove" | "rm" => return Err(usage("remove <item>")),
            "note" | "notes" => {
                // 備註可以清空：`note 1` 代表把備註設成空字串
                let (item, text) = match rest.split_once(char::is_whitespace) {
                    Some((item, text)) => (item, text.trim()),
                    None => (rest, ""),
                };
                if item.is_empty() {
                    return Err(usage("note <item> <text...>"));
                }
                ShellCommand::Note {
                    item: item.to_string(),
                    text: text.to_string(),
                }
            }
            "cart" | "open" => ShellCommand::Cart,
            "close" => ShellCommand::Close,
            "checkout" => ShellCommand::Checkout,
            "submit" => ShellCommand::Submit(parse_contact(rest)?),
            "blog" => ShellCommand::Blog,
            "portfolio" | "work" => {
                ShellCommand::Portfolio(Some(rest.to_string()).filter(|c| !c.is_empty()))
            }
            "home" => ShellCommand::Home,
            "quit" | "exit" => ShellCommand::Quit,
            other => {
                return Err(QuoteError::ValidationError {
                    message: format!("unknown command '{}', try 'help'", other),
                })
            }
        };

        Ok(command)
    }
}

fn portfolio_line(item: &PortfolioItem) -> String {
    let star = if item.featured { "*" } else { " " };
    format!("{} {} for {} [{}]", star, item.title, item.client, item.category)
}

/// 互動式購物車：每一行輸入就是一次使用者操作。
pub struct Shell<'a, P: ContentProvider, K: QuoteSink + ?Sized> {
    storefront: &'a Storefront<P>,
    sink: &'a K,
    session: Session,
    catalog: Catalog,
}

impl<'a, P: ContentProvider, K: QuoteSink + ?Sized> Shell<'a, P, K> {
    pub fn new(storefront: &'a Storefront<P>, sink: &'a K, catalog: Catalog) -> Self {
        Self {
            storefront,
            sink,
            session: Session::new(),
            catalog,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn prompt(&self) -> String {
        match self.session.overlay() {
            Overlay::Closed => format!("quote-cart [{}]> ", self.session.cart_count()),
            overlay => format!("quote-cart [{} | {}]> ", self.session.cart_count(), overlay),
        }
    }

    pub async fn run<R, W>(&mut self, input: R, out: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = input.lines();
        writeln!(out, "Type 'help' for commands.")?;

        loop {
            write!(out, "{}", self.prompt())?;
            out.flush()?;

            let Some(line) = lines.next_line().await? else {
                writeln!(out)?;
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<ShellCommand>() {
                Ok(ShellCommand::Quit) => break,
                Ok(command) => self.handle(command, out).await?,
                Err(e) => writeln!(out, "{}", e.user_friendly_message())?,
            }
        }

        tracing::debug!(
            "Shell finished with {} item(s) left in the cart",
            self.session.cart_count()
        );
        Ok(())
    }

    /// 把位置（從 1 開始）或 uuid 轉成 item id
    fn resolve_item(&self, target: &str) -> Option<CartItemId> {
        if let Ok(position) = target.parse::<usize>() {
            return position
                .checked_sub(1)
                .and_then(|index| self.session.cart().items().get(index))
                .map(|item| item.id);
        }
        CartItemId::parse(target)
    }

    pub async fn handle<W: Write>(&mut self, command: ShellCommand, out: &mut W) -> Result<()> {
        match command {
            ShellCommand::Help => writeln!(out, "{}", HELP)?,
            ShellCommand::Services => {
                let added = self.session.cart().added_service_ids();
                write!(out, "{}", self.catalog.render(&added))?;
            }
            ShellCommand::Add(service_id) => match self.catalog.find(&service_id) {
                None => writeln!(out, "No service with id '{}'", service_id)?,
                Some(service) => {
                    let name = service.name.clone();
                    if self.session.add_to_cart(service.clone()) {
                        writeln!(out, "Added {} to your wishlist", name)?;
                    } else {
                        writeln!(out, "{} is already in your wishlist", name)?;
                    }
                }
            },
            ShellCommand::Remove(target) => {
                let removed = self
                    .resolve_item(&target)
                    .and_then(|id| self.session.remove_from_cart(id));
                match removed {
                    Some(item) => writeln!(out, "Removed {}", item.service.name)?,
                    None => writeln!(out, "No item '{}' in your wishlist", target)?,
                }
            }
            ShellCommand::Note { item, text } => {
                let updated = self
                    .resolve_item(&item)
                    .is_some_and(|id| self.session.update_cart_item_notes(id, text));
                if updated {
                    writeln!(out, "Notes saved")?;
                } else {
                    writeln!(out, "No item '{}' in your wishlist", item)?;
                }
            }
            ShellCommand::Cart => {
                self.session.open_cart();
                write!(out, "{}", drawer::render(self.session.cart()))?;
            }
            ShellCommand::Close => {
                if !(self.session.close_checkout() || self.session.close_cart()) {
                    writeln!(out, "Nothing is open")?;
                }
            }
            ShellCommand::Checkout => self.checkout(out)?,
            ShellCommand::Submit(contact) => self.submit(contact, out).await?,
            ShellCommand::Blog => {
                let posts = self.storefront.load_blog_posts().await;
                if posts.is_empty() {
                    writeln!(out, "No posts yet.")?;
                }
                for post in posts {
                    writeln!(
                        out,
                        "{}  {} ({} min read)  /blog/{}",
                        post.published_at.format("%Y-%m-%d"),
                        post.title,
                        post.read_time,
                        post.slug
                    )?;
                }
            }
            ShellCommand::Portfolio(category) => self.portfolio(category.as_deref(), out).await?,
            ShellCommand::Home => self.home(out).await?,
            ShellCommand::Quit => {}
        }
        Ok(())
    }

    /// 首頁：三個來源同時重新讀取，順便更新目錄
    async fn home<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let content = self.storefront.load_all().await;
        self.catalog = content.catalog;

        writeln!(
            out,
            "{} service(s) available. Type 'services' to browse.",
            self.catalog.services().len()
        )?;

        writeln!(out, "Latest posts:")?;
        if content.blog_posts.is_empty() {
            writeln!(out, "  No posts yet.")?;
        }
        for post in &content.blog_posts {
            writeln!(out, "  {}  {}", post.published_at.format("%Y-%m-%d"), post.title)?;
        }

        writeln!(out, "Featured work:")?;
        if content.portfolio_items.is_empty() {
            writeln!(out, "  No portfolio items yet.")?;
        }
        for item in &content.portfolio_items {
            writeln!(out, "  {}", portfolio_line(item))?;
        }
        Ok(())
    }

    async fn portfolio<W: Write>(&self, category: Option<&str>, out: &mut W) -> Result<()> {
        let items = self.storefront.load_full_portfolio().await;
        if items.is_empty() {
            writeln!(out, "No portfolio items yet.")?;
            return Ok(());
        }

        writeln!(out, "Categories: {}", portfolio::categories(&items).join(" | "))?;
        let selected = portfolio::filter_by_category(&items, category.unwrap_or(portfolio::ALL));
        if selected.is_empty() {
            writeln!(out, "No work in '{}' yet.", category.unwrap_or_default())?;
        }
        for item in selected {
            writeln!(out, "{}", portfolio_line(item))?;
        }
        Ok(())
    }

    fn checkout<W: Write>(&mut self, out: &mut W) -> Result<()> {
        if !self.session.overlay().is_cart_open() {
            writeln!(out, "Open your wishlist first ('cart')")?;
            return Ok(());
        }

        match self.session.initiate_checkout() {
            Some(items) => {
                writeln!(out, "Checkout: {}", drawer::summary_line(items.len()))?;
                for item in &items {
                    writeln!(out, "  - {}", item.service.name)?;
                }
                writeln!(out, "Send it with: {}", SUBMIT_USAGE)?;
            }
            None => writeln!(out, "{}", drawer::EMPTY_TITLE)?,
        }
        Ok(())
    }

    async fn submit<W: Write>(&mut self, contact: ContactDetails, out: &mut W) -> Result<()> {
        if !self.session.overlay().is_checkout_open() {
            writeln!(out, "Start checkout first ('cart', then 'checkout')")?;
            return Ok(());
        }

        match self.session.submit(contact, self.sink).await {
            Ok(reference) => {
                writeln!(out, "✅ Quote request sent! We'll be in touch soon.")?;
                writeln!(out, "📁 {}", reference)?;
            }
            Err(e) => {
                tracing::error!("❌ Quote submission failed: {}", e);
                writeln!(out, "❌ {}", e.user_friendly_message())?;
                writeln!(out, "💡 {}", e.recovery_suggestion())?;
            }
        }
        Ok(())
    }
}
