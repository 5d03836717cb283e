use bank_core::Number;

/// JWT payload binding a bearer to one account number.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Claims {
    #[serde(rename = "accountNumber")]
    pub num: Number,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(number: Number) -> Self {
        let now = now();
        Self {
            num: number,
            iat: now,
            exp: now + bank_core::TOKEN_DURATION.as_secs() as i64,
        }
    }
    pub fn expired(&self) -> bool {
        self.exp < now()
    }
    pub fn number(&self) -> Number {
        self.num
    }
}

fn now() -> i64 {
    chrono::Utc::now().timestamp()
}
