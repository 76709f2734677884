pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod clock;
    }
}

pub mod modules {
    pub mod auctions {
        pub mod core {
            pub mod auction;
            pub mod decision;
            pub mod item;
            pub mod status;
        }
        pub mod use_cases {
            pub mod list_auctions {
                pub mod filter;
                pub mod handler;
                pub mod projection;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_auction {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_auction {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_auction {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_auction {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod errors;
        }
        pub mod adapters {
            pub mod outbound {
                pub mod auction_repository;
                pub mod auction_repository_in_memory;
            }
        }
    }
    pub mod search {
        pub mod core {
            pub mod item;
            pub mod watermark;
        }
        pub mod use_cases {
            pub mod sync_items {
                pub mod auction_record;
                pub mod handler;
                pub mod retry_policy;
                pub mod source_port;
                pub mod worker;
            }
            pub mod search_items {
                pub mod params;
                pub mod queries_port;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod mappers {
                pub mod auction_record_to_item;
            }
            pub mod outbound {
                pub mod auction_service_http_client;
                pub mod item_store;
                pub mod item_store_in_memory;
            }
        }
    }
}

pub mod shell;
