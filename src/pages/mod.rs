pub mod campaign_create;
pub mod campaign_detail;
pub mod campaign_list;
pub mod home;
pub mod knowledge;
