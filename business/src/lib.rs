pub mod application {
    pub mod cart {
        pub mod store;
    }
    pub mod catalog {
        pub mod session_store;
    }
    pub mod product {
        pub mod get_by_id;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod observable;
        pub mod value_objects;
    }
    pub mod product {
        pub mod errors;
        pub mod fallback;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_by_id;
        }
    }
    pub mod catalog {
        pub mod state;
        pub mod store;
    }
    pub mod cart {
        pub mod model;
        pub mod store;
    }
}
