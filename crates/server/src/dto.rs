use bank_core::Id;
use bank_core::Number;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub to_account: Number,
    pub amount: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub id: Id,
}
