use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::employee::Employee;

const DEFAULT_LIMIT: i64 = 5;
const DEFAULT_PAGE: i64 = 1;
const HIGH_SALARY_THRESHOLD: f64 = 10_000.0;

#[derive(Deserialize)]
pub(crate) struct ListQueryParams {
    limit: Option<String>,
    page: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct NewEmployee {
    name: Option<String>,
    salary: Option<f64>,
}

#[derive(Deserialize)]
pub(crate) struct EmployeeUpdate {
    name: Option<String>,
    salary: Option<f64>,
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/employees")
            .route(web::get().to(get_paginated_employees))
            .route(web::post().to(create_employee))
            .route(web::delete().to(delete_high_salary_employees)),
    )
    .service(
        web::resource("/employees/{id}")
            .route(web::get().to(get_employee_by_id))
            .route(web::put().to(update_employee_by_id)),
    );
}

// Absent, non-numeric, and non-positive values all fall back to the default.
fn positive_or(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|s| s.parse::<i64>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(default)
}

// An empty-string name counts as missing; a zero salary is a real value and
// is accepted, unlike the source's falsy check.
fn required_fields(payload: &NewEmployee) -> Option<(&str, f64)> {
    match (payload.name.as_deref(), payload.salary) {
        (Some(name), Some(salary)) if !name.is_empty() => Some((name, salary)),
        _ => None,
    }
}

pub async fn get_paginated_employees(
    pool: web::Data<sqlx::PgPool>,
    query: web::Query<ListQueryParams>,
) -> Result<HttpResponse, actix_web::Error> {
    let limit = positive_or(query.limit.as_deref(), DEFAULT_LIMIT);
    let page = positive_or(query.page.as_deref(), DEFAULT_PAGE);
    let offset = (page - 1).saturating_mul(limit);

    let employees = sqlx::query_as::<_, Employee>(
        "SELECT * FROM employees ORDER BY salary ASC LIMIT $1 OFFSET $2",
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(&**pool)
    .await
    .map_err(|err| AppError::DatabaseError(err.to_string()))?;

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees")
        .fetch_one(&**pool)
        .await
        .map_err(|err| AppError::DatabaseError(err.to_string()))?;

    Ok(HttpResponse::Ok().json(json!({
        "employees": employees,
        "count": count,
    })))
}

pub async fn create_employee(
    pool: web::Data<sqlx::PgPool>,
    payload: web::Json<NewEmployee>,
) -> Result<HttpResponse, actix_web::Error> {
    let (name, salary) = required_fields(&payload)
        .ok_or_else(|| AppError::BadRequest("Name and salary are required".to_string()))?;

    let now = Utc::now();
    let employee = sqlx::query_as::<_, Employee>(
        "INSERT INTO employees (id, name, salary, created_at, updated_at)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(name)
    .bind(salary)
    .bind(now)
    .bind(now)
    .fetch_one(&**pool)
    .await
    .map_err(|err| AppError::DatabaseError(err.to_string()))?;

    Ok(HttpResponse::Created().json(employee))
}

pub async fn get_employee_by_id(
    pool: web::Data<sqlx::PgPool>,
    id: web::Path<String>,
) -> Result<HttpResponse, actix_web::Error> {
    // A malformed id cannot address any record.
    let id = Uuid::parse_str(&id.into_inner())
        .map_err(|_| AppError::NotFound("Employee not found".to_string()))?;

    let employee = sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE id = $1")
        .bind(id)
        .fetch_optional(&**pool)
        .await
        .map_err(|err| AppError::DatabaseError(err.to_string()))?;

    match employee {
        Some(employee) => Ok(HttpResponse::Ok().json(employee)),
        None => Err(AppError::NotFound("Employee not found".to_string()).into()),
    }
}

pub async fn update_employee_by_id(
    pool: web::Data<sqlx::PgPool>,
    id: web::Path<String>,
    updates: web::Json<EmployeeUpdate>,
) -> Result<HttpResponse, actix_web::Error> {
    let id = Uuid::parse_str(&id.into_inner())
        .map_err(|_| AppError::NotFound("Employee not found".to_string()))?;

    // Single atomic update; absent fields keep their stored values.
    let employee = sqlx::query_as::<_, Employee>(
        "UPDATE employees
         SET name = COALESCE($1, name),
             salary = COALESCE($2, salary),
             updated_at = $3
         WHERE id = $4
         RETURNING *",
    )
    .bind(updates.name.as_deref())
    .bind(updates.salary)
    .bind(Utc::now())
    .bind(id)
    .fetch_optional(&**pool)
    .await
    .map_err(|err| AppError::DatabaseError(err.to_string()))?;

    match employee {
        Some(employee) => Ok(HttpResponse::Ok().json(employee)),
        None => Err(AppError::NotFound("Employee not found".to_string()).into()),
    }
}

pub async fn delete_high_salary_employees(
    pool: web::Data<sqlx::PgPool>,
) -> Result<HttpResponse, actix_web::Error> {
    let result = sqlx::query("DELETE FROM employees WHERE salary > $1")
        .bind(HIGH_SALARY_THRESHOLD)
        .execute(&**pool)
        .await
        .map_err(|err| AppError::DatabaseError(err.to_string()))?;

    let count = result.rows_affected();
    if count == 0 {
        return Err(AppError::NotFound("No employees found to delete".to_string()).into());
    }

    Ok(HttpResponse::Ok().json(json!({
        "message": format!("Deleted {} employees", count),
    })))
}
