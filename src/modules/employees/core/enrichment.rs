use crate::modules::employees::core::department::Department;
use crate::modules::employees::core::employee::Employee;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedEmployee {
    #[serde(rename = "EmpId")]
    pub emp_id: i32,
    #[serde(rename = "Ename")]
    pub ename: String,
    #[serde(rename = "DeptId")]
    pub dept_id: i32,
    #[serde(rename = "DeptName")]
    pub dept_name: String,
}

/// Inner equi-join on department identifier.
///
/// Employees without a matching department are dropped. Employee order is
/// kept, and when several departments share an identifier the first one wins.
pub fn join_departments(
    employees: Vec<Employee>,
    departments: &[Department],
) -> Vec<EnrichedEmployee> {
    let mut names: HashMap<i32, &str> = HashMap::with_capacity(departments.len());
    for department in departments {
        names
            .entry(department.dept_id)
            .or_insert(department.dept_name.as_str());
    }

    employees
        .into_iter()
        .filter_map(|employee| {
            let dept_name = names.get(&employee.dept_id)?;
            Some(EnrichedEmployee {
                emp_id: employee.empid,
                ename: employee.ename,
                dept_id: employee.dept_id,
                dept_name: (*dept_name).to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod enrichment_join_tests {
    use super::*;
    use rstest::rstest;

    fn employee(empid: i32, ename: &str, dept_id: i32) -> Employee {
        Employee {
            empid,
            ename: ename.into(),
            dept_id,
        }
    }

    fn department(dept_id: i32, dept_name: &str) -> Department {
        Department {
            dept_id,
            dept_name: dept_name.into(),
        }
    }

    #[rstest]
    fn it_should_drop_employees_without_a_matching_department() {
        let result = join_departments(
            vec![employee(1, "A", 10), employee(2, "B", 20)],
            &[department(10, "Sales")],
        );

        assert_eq!(
            result,
            vec![EnrichedEmployee {
                emp_id: 1,
                ename: "A".into(),
                dept_id: 10,
                dept_name: "Sales".into(),
            }]
        );
    }

    #[rstest]
    fn it_should_keep_employee_order() {
        let result = join_departments(
            vec![employee(3, "C", 20), employee(1, "A", 10), employee(2, "B", 20)],
            &[department(10, "Sales"), department(20, "Ops")],
        );

        let ids: Vec<i32> = result.iter().map(|e| e.emp_id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(result[0].dept_name, "Ops");
    }

    #[rstest]
    fn it_should_use_the_first_department_when_identifiers_repeat() {
        let result = join_departments(
            vec![employee(1, "A", 10)],
            &[department(10, "Sales"), department(10, "Marketing")],
        );

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].dept_name, "Sales");
    }

    #[rstest]
    #[case(vec![], vec![department(10, "Sales")])]
    #[case(vec![employee(1, "A", 10)], vec![])]
    fn it_should_return_nothing_when_either_side_is_empty(
        #[case] employees: Vec<Employee>,
        #[case] departments: Vec<Department>,
    ) {
        assert!(join_departments(employees, &departments).is_empty());
    }

    #[rstest]
    fn it_should_serialize_with_the_wire_field_names() {
        let enriched = EnrichedEmployee {
            emp_id: 1,
            ename: "A".into(),
            dept_id: 10,
            dept_name: "Sales".into(),
        };
        assert_eq!(
            serde_json::to_value(enriched).unwrap(),
            serde_json::json!({"EmpId": 1, "Ename": "A", "DeptId": 10, "DeptName": "Sales"})
        );
    }
}
