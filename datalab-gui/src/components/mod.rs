pub mod campaign_detail;
pub mod campaign_list;
pub mod new_campaign_dialog;
pub mod sidebar;
