use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub credits: Option<u32>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewCourse {
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub credits: Option<u32>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    pub course_name: String,
    /// ISO-8601 due date as sent by the backend
    pub due_date: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub max_marks: Option<f64>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewAssignment {
    pub title: String,
    pub course_id: String,
    pub description: String,
    pub due_date: String,
    pub max_marks: f64,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub content: String,
    #[serde(default)]
    pub attachment_url: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GradeSubmission {
    pub marks: f64,
    #[serde(default)]
    pub feedback: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Grade {
    pub course_name: String,
    pub grade: String,
    #[serde(default)]
    pub marks: Option<f64>,
    #[serde(default)]
    pub semester: Option<String>,
}
