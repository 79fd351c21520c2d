/**
 * Directory Store
 *
 * In-memory account directory. Accounts keep their seed order, which is
 * the order results are returned in.
 *
 * # Matching
 *
 * - pseudo and email: case-insensitive substring
 * - phone: digits only, and only for queries that look like a phone number
 *   (digits plus spaces, dots, dashes, `+`)
 * - an empty or blank query matches nobody
 */

use uuid::Uuid;

use crate::backend::directory::seed::AccountSeed;
use crate::backend::error::BackendError;
use crate::shared::User;

/// Default number of users per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A directory account: the public user plus private lookup fields
#[derive(Debug, Clone)]
pub struct Account {
    pub user: User,
    pub email: String,
    pub phone: String,
    password_hash: String,
}

impl Account {
    pub fn new(user: User, email: String, phone: String, password_hash: String) -> Self {
        Self {
            user,
            email,
            phone,
            password_hash,
        }
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    fn matches(&self, query: &Query) -> bool {
        if self.user.pseudo.to_lowercase().contains(&query.text)
            || self.email.to_lowercase().contains(&query.text)
        {
            return true;
        }
        match &query.digits {
            Some(digits) => digits_of(&self.phone).contains(digits.as_str()),
            None => false,
        }
    }
}

/// Normalized search query
#[derive(Debug)]
struct Query {
    text: String,
    digits: Option<String>,
}

impl Query {
    fn parse(raw: &str) -> Option<Self> {
        let text = raw.trim().to_lowercase();
        if text.is_empty() {
            return None;
        }

        let phone_like = text
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '.' | '-' | '+'));
        let digits = digits_of(&text);
        let digits = (phone_like && !digits.is_empty()).then_some(digits);

        Some(Self { text, digits })
    }
}

fn digits_of(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// The account directory
#[derive(Debug, Clone)]
pub struct Directory {
    accounts: Vec<Account>,
    page_size: usize,
}

impl Directory {
    pub fn new(accounts: Vec<Account>, page_size: usize) -> Self {
        Self {
            accounts,
            page_size: page_size.max(1),
        }
    }

    /// Build a directory from seeds, hashing each password with `cost`
    pub fn from_seeds(
        seeds: Vec<AccountSeed>,
        page_size: usize,
        cost: u32,
    ) -> Result<Self, BackendError> {
        let accounts = seeds
            .into_iter()
            .map(|seed| -> Result<Account, BackendError> {
                let password_hash = bcrypt::hash(&seed.password, cost)?;
                let user = User {
                    id: seed.id,
                    pseudo: seed.pseudo,
                    firstname: seed.firstname,
                    lastname: seed.lastname,
                    photo: seed.photo,
                };
                Ok(Account::new(user, seed.email, seed.phone, password_hash))
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!("Directory ready with {} accounts", accounts.len());
        Ok(Self::new(accounts, page_size))
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// All users matching `query`, in directory order, minus `exclude`
    pub fn matches(&self, query: &str, exclude: Option<Uuid>) -> Vec<&User> {
        let Some(query) = Query::parse(query) else {
            return Vec::new();
        };

        self.accounts
            .iter()
            .filter(|account| Some(account.user.id) != exclude)
            .filter(|account| account.matches(&query))
            .map(|account| &account.user)
            .collect()
    }

    /// One page (1-based) of matching users; page 0 is treated as page 1
    pub fn page(&self, query: &str, page: u32, exclude: Option<Uuid>) -> Vec<User> {
        let index = page.saturating_sub(1) as usize;
        self.matches(query, exclude)
            .into_iter()
            .skip(index.saturating_mul(self.page_size))
            .take(self.page_size)
            .cloned()
            .collect()
    }

    /// Account by pseudo, case-insensitive
    pub fn find_by_pseudo(&self, pseudo: &str) -> Option<&Account> {
        let pseudo = pseudo.trim();
        self.accounts
            .iter()
            .find(|account| account.user.pseudo.eq_ignore_ascii_case(pseudo))
    }

    pub fn get(&self, id: Uuid) -> Option<&User> {
        self.accounts
            .iter()
            .map(|account| &account.user)
            .find(|user| user.id == id)
    }
}
