pub mod shared {
    pub mod core {
        pub mod clock;
    }
}

pub mod modules {
    pub mod work_sessions {
        pub mod core {
            pub mod duration;
            pub mod open_session;
            pub mod periods;
            pub mod ports;
            pub mod work_entry;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod start_work_session {
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod stop_work_session {
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod compute_averages {
                pub mod aggregate;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_last_seven_days {
                pub mod select;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod month_by_day {
                pub mod group;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
                pub mod session_cookie;
            }
            pub mod outbound {
                pub mod flat_file_entry_log;
                pub mod in_memory_entry_log;
                pub mod in_memory_session_store;
            }
        }
    }
}

pub mod shell;
