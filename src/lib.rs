pub mod shared {
    pub mod auth {
        pub mod extractor;
        pub mod identity;
        pub mod policy;
    }
    pub mod infrastructure {
        pub mod database;
        pub mod request_timing;
    }
}

pub mod modules {
    pub mod employees {
        pub mod core {
            pub mod department;
            pub mod employee;
            pub mod enrichment;
        }
        pub mod use_cases {
            pub mod manage_employees {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_employees_with_departments {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod department_directory;
                pub mod department_directory_http;
                pub mod department_directory_in_memory;
                pub mod employee_store;
                pub mod employee_store_in_memory;
                pub mod employee_store_postgres;
            }
        }
    }
}

pub mod shell;

#[cfg(test)]
pub mod tests {
    pub mod fixtures;

    pub mod e2e {
        pub mod employee_api_tests;
    }
}
