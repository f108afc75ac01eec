//! Row mappings between PostgreSQL tables and domain entities

use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgConnection};
use uuid::Uuid;

use courses::{
    CourseInstance, CourseTemplate, DomainError, Entity, Person, TeacherRegistration, TeacherType,
};

/// Entity stored in its own PostgreSQL table
#[async_trait]
pub trait PgEntity: Entity {
    /// Query returning every row of the table
    const SELECT: &'static str;

    type Row: for<'r> sqlx::FromRow<'r, PgRow> + Send + Unpin;

    fn from_row(row: Self::Row) -> Result<Self, DomainError>;

    async fn insert(&self, conn: &mut PgConnection) -> Result<(), sqlx::Error>;
}

#[derive(sqlx::FromRow)]
pub struct PersonRow {
    ssn: String,
    name: String,
}

#[async_trait]
impl PgEntity for Person {
    const SELECT: &'static str = "SELECT ssn, name FROM persons";

    type Row = PersonRow;

    fn from_row(row: PersonRow) -> Result<Self, DomainError> {
        Ok(Person::new(row.ssn, row.name))
    }

    async fn insert(&self, conn: &mut PgConnection) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO persons (ssn, name) VALUES ($1, $2)")
            .bind(&self.ssn)
            .bind(&self.name)
            .execute(conn)
            .await?;
        Ok(())
    }
}

#[derive(sqlx::FromRow)]
pub struct CourseTemplateRow {
    course_id: String,
    name: String,
}

#[async_trait]
impl PgEntity for CourseTemplate {
    const SELECT: &'static str = "SELECT course_id, name FROM course_templates";

    type Row = CourseTemplateRow;

    fn from_row(row: CourseTemplateRow) -> Result<Self, DomainError> {
        Ok(CourseTemplate::new(row.course_id, row.name))
    }

    async fn insert(&self, conn: &mut PgConnection) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO course_templates (course_id, name) VALUES ($1, $2)")
            .bind(&self.course_id)
            .bind(&self.name)
            .execute(conn)
            .await?;
        Ok(())
    }
}

#[derive(sqlx::FromRow)]
pub struct CourseInstanceRow {
    id: i32,
    course_id: String,
    semester: String,
}

#[async_trait]
impl PgEntity for CourseInstance {
    const SELECT: &'static str = "SELECT id, course_id, semester FROM course_instances";

    type Row = CourseInstanceRow;

    fn from_row(row: CourseInstanceRow) -> Result<Self, DomainError> {
        Ok(CourseInstance::new(row.id, row.course_id, row.semester))
    }

    async fn insert(&self, conn: &mut PgConnection) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO course_instances (id, course_id, semester) VALUES ($1, $2, $3)")
            .bind(self.id)
            .bind(&self.course_id)
            .bind(&self.semester)
            .execute(conn)
            .await?;
        Ok(())
    }
}

#[derive(sqlx::FromRow)]
pub struct TeacherRegistrationRow {
    id: Uuid,
    course_instance_id: i32,
    ssn: String,
    #[sqlx(rename = "type")]
    teacher_type: i16,
    created_at: chrono::DateTime<chrono::Utc>,
}

#[async_trait]
impl PgEntity for TeacherRegistration {
    const SELECT: &'static str =
        "SELECT id, course_instance_id, ssn, type, created_at FROM teacher_registrations";

    type Row = TeacherRegistrationRow;

    fn from_row(row: TeacherRegistrationRow) -> Result<Self, DomainError> {
        let teacher_type = TeacherType::try_from(row.teacher_type).map_err(DomainError::Repository)?;
        Ok(TeacherRegistration {
            id: row.id,
            course_instance_id: row.course_instance_id,
            ssn: row.ssn,
            teacher_type,
            created_at: row.created_at,
        })
    }

    async fn insert(&self, conn: &mut PgConnection) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO teacher_registrations (id, course_instance_id, ssn, type, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(self.id)
        .bind(self.course_instance_id)
        .bind(&self.ssn)
        .bind(self.teacher_type.tag())
        .bind(self.created_at)
        .execute(conn)
        .await?;
        Ok(())
    }
}
