use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::data_definitions::filter_query::FilterQuery;
use crate::pages::event_detail_page::EventDetailPage;
use crate::pages::event_list_page::EventListPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/?:..filters")]
    EventListPage {
        filters: FilterQuery,
    },


    #[route("/event/:event_id")]
    EventDetailPage { event_id: String },

}

impl Route {
    pub fn default_listing() -> Self {
        Self::EventListPage {
            filters: FilterQuery::default(),
        }
    }
}
