pub mod application {
    pub mod basket {
        pub mod add_item;
        pub mod delete_item;
        pub mod get_all;
        pub mod get_buyer_basket;
        pub mod get_buyer_basket_range;
        pub mod get_item;
        pub mod update_item;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod basket {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_item;
            pub mod delete_item;
            pub mod get_all;
            pub mod get_buyer_basket;
            pub mod get_buyer_basket_range;
            pub mod get_item;
            pub mod update_item;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
}
