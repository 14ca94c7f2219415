pub mod event_list_page;
pub mod event_detail_page;
