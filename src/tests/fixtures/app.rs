use crate::modules::employees::adapters::outbound::department_directory::DepartmentDirectory;
use crate::modules::employees::adapters::outbound::employee_store::EmployeeStore;
use crate::modules::employees::use_cases::list_employees_with_departments::handler::ListEmployeesWithDepartmentsHandler;
use crate::modules::employees::use_cases::manage_employees::handler::ManageEmployeesHandler;
use crate::shared::auth::identity::{TokenSettings, TokenVerifier};
use crate::shell::state::AppState;
use crate::tests::fixtures::tokens::TEST_SECRET;
use std::sync::Arc;

pub fn make_test_state(
    store: Arc<dyn EmployeeStore>,
    directory: Arc<dyn DepartmentDirectory>,
) -> AppState {
    AppState {
        manage_employees: Arc::new(ManageEmployeesHandler::new(store.clone())),
        list_with_departments: Arc::new(ListEmployeesWithDepartmentsHandler::new(
            store, directory,
        )),
        tokens: Arc::new(TokenVerifier::new(&TokenSettings {
            secret: TEST_SECRET.into(),
            issuer: None,
            audience: None,
        })),
    }
}
