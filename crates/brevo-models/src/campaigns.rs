//! Email campaign models (read-only shapes, no endpoint bindings yet)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CampaignType {
  Classic,
  Trigger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CampaignStatus {
  Draft,
  Sent,
  Archive,
  Queued,
  Suspended,
  InProcess,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignSender {
  pub name: String,
  pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignStatistics {
  pub delivered: Option<u64>,
  pub opened: Option<u64>,
  pub click: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
  pub id: u64,
  pub name: String,
  pub subject: String,
  pub sender: CampaignSender,
  #[serde(rename = "type")]
  pub campaign_type: CampaignType,
  pub status: CampaignStatus,
  #[serde(default)]
  pub statistics: Option<CampaignStatistics>,
  #[serde(default)]
  pub created_at: Option<String>,
  #[serde(default)]
  pub modified_at: Option<String>,
}
