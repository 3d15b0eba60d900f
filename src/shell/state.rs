use crate::modules::employees::use_cases::list_employees_with_departments::handler::ListEmployeesWithDepartmentsHandler;
use crate::modules::employees::use_cases::manage_employees::handler::ManageEmployeesHandler;
use crate::shared::auth::identity::TokenVerifier;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub manage_employees: Arc<ManageEmployeesHandler>,
    pub list_with_departments: Arc<ListEmployeesWithDepartmentsHandler>,
    pub tokens: Arc<TokenVerifier>,
}
