use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Body of every non-200 response. Missing fields decode as zero values.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ErrorEnvelope {
    pub status: u16,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct Base64Image<'a> {
    pub image: &'a str,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct Bank {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short: Option<String>,
}

/// Account holder name, in Thai and/or English.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct AccountName {
    #[serde(rename = "th", default, skip_serializing_if = "Option::is_none")]
    pub thai: Option<String>,
    #[serde(rename = "en", default, skip_serializing_if = "Option::is_none")]
    pub english: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct BankAccount {
    #[serde(rename = "type")]
    pub kind: String,
    pub account: String,
}

/// PromptPay style proxy (phone number, national id, e-wallet id...).
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ProxyAccount {
    #[serde(rename = "type")]
    pub kind: String,
    pub account: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct Account {
    pub name: AccountName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank: Option<BankAccount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy: Option<ProxyAccount>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct LocalAmount {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct Amount {
    pub amount: f64,
    pub local: LocalAmount,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartyInfo {
    pub bank: Bank,
    pub account: Account,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<String>,
}

impl PartyInfo {
    /// Thai name if present, English otherwise.
    pub fn display_name(&self) -> Option<&str> {
        self.account
            .name
            .thai
            .as_deref()
            .or(self.account.name.english.as_deref())
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VerificationData {
    pub payload: String,
    pub trans_ref: String,
    pub date: DateTime<FixedOffset>,
    pub country_code: String,
    pub amount: Amount,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref3: Option<String>,
    pub sender: PartyInfo,
    pub receiver: PartyInfo,
}

/// Result of a bank slip verification (image, payload or base64).
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct VerificationResponse {
    pub status: u16,
    pub data: VerificationData,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct TrueWalletSender {
    pub name: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct TrueWalletReceiver {
    pub name: String,
    pub phone: String,
}

// The TrueMoney endpoint reports a flat amount, without the local currency
// breakdown of bank slips.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrueWalletData {
    pub transaction_id: String,
    pub date: DateTime<FixedOffset>,
    pub amount: f64,
    pub sender: TrueWalletSender,
    pub receiver: TrueWalletReceiver,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct TrueWalletVerificationResponse {
    pub status: u16,
    pub data: TrueWalletData,
}
