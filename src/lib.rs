pub mod shared {
    pub mod core {
        pub mod errors;
        pub mod event;
        pub mod http_error_info;
    }
    pub mod application {
        pub mod store_applier;
    }
    pub mod infrastructure {
        pub mod downstream;
        pub mod event_channel;
        pub mod health;
        pub mod persistence;
    }
}

pub mod modules {
    pub mod products {
        pub mod core {
            pub mod product;
        }
        pub mod use_cases {
            pub mod product_service;
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http;
            }
            pub mod outbound {
                pub mod repository;
                pub mod repository_in_memory;
            }
        }
    }
    pub mod recommendations {
        pub mod core {
            pub mod recommendation;
        }
        pub mod use_cases {
            pub mod recommendation_service;
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http;
            }
            pub mod outbound {
                pub mod repository;
                pub mod repository_in_memory;
            }
        }
    }
    pub mod reviews {
        pub mod core {
            pub mod review;
        }
        pub mod use_cases {
            pub mod review_service;
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http;
            }
            pub mod outbound {
                pub mod repository;
                pub mod repository_in_memory;
            }
        }
    }
    pub mod product_composite {
        pub mod core {
            pub mod aggregate;
            pub mod errors;
        }
        pub mod use_cases {
            pub mod get_product_aggregate {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod create_product_aggregate {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod delete_product_aggregate {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
                pub mod http_errors;
            }
            pub mod outbound {
                pub mod core_services;
                pub mod core_services_http;
                pub mod core_services_in_process;
                pub mod event_publisher;
            }
        }
    }
}

pub mod shell;
