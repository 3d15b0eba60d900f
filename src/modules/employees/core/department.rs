// Department records owned by the external Department service.
//
// Field names on the wire are matched without regard to case, so
// `DeptId`, `deptId` and `DEPTID` all land in the same field.

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Department {
    #[serde(rename = "DeptId")]
    pub dept_id: i32,
    #[serde(rename = "DeptName")]
    pub dept_name: String,
}

impl<'de> Deserialize<'de> for Department {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(DepartmentVisitor)
    }
}

struct DepartmentVisitor;

impl<'de> Visitor<'de> for DepartmentVisitor {
    type Value = Department;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a department object with DeptId and DeptName")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut dept_id = None;
        let mut dept_name = None;

        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case("deptid") {
                if dept_id.is_some() {
                    return Err(de::Error::duplicate_field("DeptId"));
                }
                dept_id = Some(map.next_value()?);
            } else if key.eq_ignore_ascii_case("deptname") {
                if dept_name.is_some() {
                    return Err(de::Error::duplicate_field("DeptName"));
                }
                dept_name = Some(map.next_value()?);
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }

        Ok(Department {
            dept_id: dept_id.ok_or_else(|| de::Error::missing_field("DeptId"))?,
            dept_name: dept_name.ok_or_else(|| de::Error::missing_field("DeptName"))?,
        })
    }
}

/// Parse a Department service response body.
pub fn parse_departments(body: &str) -> Result<Vec<Department>, serde_json::Error> {
    serde_json::from_str(body)
}
