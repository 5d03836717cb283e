use bank_core::Balance;
use bank_core::Id;
use bank_core::Number;
use bank_core::Unique;
use chrono::DateTime;
use chrono::SubsecRound;
use chrono::Utc;

/// Customer account.
///
/// The password hash is held for verification only and is never serialized.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    id: Id,
    first_name: String,
    last_name: String,
    number: Number,
    #[serde(skip)]
    hashword: String,
    balance: Balance,
    created_at: DateTime<Utc>,
}

impl Account {
    /// Opens a new, unsaved account under a freshly drawn public number.
    pub fn new(first_name: String, last_name: String, hashword: String) -> Self {
        use rand::Rng;
        Self {
            id: bank_core::UNSAVED,
            first_name,
            last_name,
            number: rand::rng().random_range(bank_core::NUMBERS),
            hashword,
            balance: Balance::default(),
            created_at: Utc::now().trunc_subsecs(6),
        }
    }
    /// Rebuilds a persisted account from stored fields.
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: Id,
        first_name: String,
        last_name: String,
        number: Number,
        hashword: String,
        balance: Balance,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            number,
            hashword,
            balance,
            created_at,
        }
    }
    /// Same account under the key the repository assigned it.
    pub fn saved(self, id: Id) -> Self {
        Self { id, ..self }
    }
    /// Copies the mutable fields of `other` onto `self`.
    /// Key, number, and creation time never change after insert.
    pub fn amend(&mut self, other: &Self) {
        self.first_name = other.first_name.clone();
        self.last_name = other.last_name.clone();
        self.hashword = other.hashword.clone();
        self.balance = other.balance;
    }
    pub fn first_name(&self) -> &str {
        &self.first_name
    }
    pub fn last_name(&self) -> &str {
        &self.last_name
    }
    pub fn number(&self) -> Number {
        self.number
    }
    pub fn hashword(&self) -> &str {
        &self.hashword
    }
    pub fn balance(&self) -> Balance {
        self.balance
    }
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
    pub fn is_saved(&self) -> bool {
        self.id != bank_core::UNSAVED
    }
    /// Checks a login attempt against the stored hash.
    pub fn verify(&self, password: &str) -> bool {
        super::password::verify(password, &self.hashword)
    }
}

impl Unique for Account {
    fn id(&self) -> Id {
        self.id
    }
}

#[cfg(feature = "database")]
mod schema {
    use super::*;
    use bank_database::*;

    /// Schema implementation for Account (account table).
    impl Schema for Account {
        fn name() -> &'static str {
            ACCOUNTS
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                ACCOUNTS,
                " (
                    id                  BIGSERIAL PRIMARY KEY,
                    first_name          VARCHAR(100) NOT NULL,
                    last_name           VARCHAR(100) NOT NULL,
                    number              BIGINT UNIQUE NOT NULL,
                    encrypted_password  TEXT NOT NULL,
                    balance             BIGINT NOT NULL DEFAULT 0,
                    created_at          TIMESTAMPTZ NOT NULL
                );"
            )
        }
        fn indices() -> &'static str {
            const_format::concatcp!(
                "CREATE INDEX IF NOT EXISTS idx_",
                ACCOUNTS,
                "_number ON ",
                ACCOUNTS,
                " (number);"
            )
        }
    }
}
