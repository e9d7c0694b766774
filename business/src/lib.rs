pub mod application {
    pub mod address {
        pub mod autofill;
        pub mod get;
        pub mod submit;
    }
    pub mod cart {
        pub mod add_item;
        pub mod clear;
        pub mod get;
        pub mod remove_item;
        pub mod session;
        pub mod update_quantity;
    }
    pub mod catalog {
        pub mod browse;
        pub mod get_product;
    }
    pub mod checkout {
        pub mod place_order;
        pub mod quote;
    }
    pub mod profile {
        pub mod get;
        pub mod update;
    }
    pub mod soil {
        pub mod report;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod storage;
    pub mod address {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod autofill;
            pub mod get;
            pub mod submit;
        }
    }
    pub mod cart {
        pub mod errors;
        pub mod ledger;
        pub mod mirror;
        pub mod model;
        pub mod totals;
        pub mod use_cases {
            pub mod add_item;
            pub mod clear;
            pub mod get;
            pub mod remove_item;
            pub mod update_quantity;
        }
    }
    pub mod catalog {
        pub mod errors;
        pub mod filter;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod browse;
            pub mod get_product;
        }
    }
    pub mod checkout {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod place_order;
            pub mod quote;
        }
    }
    pub mod profile {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get;
            pub mod update;
        }
    }
    pub mod shared {
        pub mod validation;
        pub mod value_objects;
    }
    pub mod soil {
        pub mod advisor;
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod report;
        }
    }
}
