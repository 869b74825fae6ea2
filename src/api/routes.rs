//! API Routes
//!
//! HTTP endpoint definitions. Pages and forms address customers by their
//! stable id; the positional routes at the bottom keep older form URLs
//! working.

use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    routing::{get, post},
    Form, Json, Router,
};
use serde::Deserialize;

use crate::domain::{CustomerChanges, CustomerDetails, CustomerId, CustomerInfo};
use crate::error::{AppError, AppResult};
use crate::handlers::{
    AddCustomerCommand, AdjustDueCommand, AdjustDueHandler, CreateCustomerHandler,
    DeleteCustomerCommand, DeleteCustomerHandler, PaymentHandler, RecordPaymentCommand,
    UpdateCustomerCommand, UpdateCustomerHandler,
};
use crate::ledger::{CustomerRef, SharedLedger};

use super::views;

// =========================================================================
// Form types
// =========================================================================

/// Add-customer form. Missing fields arrive as empty strings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CustomerForm {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub phone_number: String,
    pub due_amount: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PaymentForm {
    pub payment_amount: String,
    pub payment_date: String,
    pub payment_method: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateCustomerForm {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub phone_number: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AdjustDueForm {
    pub due_amount: String,
}

// =========================================================================
// API Router
// =========================================================================

/// Create the API router
pub fn create_router() -> Router<SharedLedger> {
    Router::new()
        .route("/", get(list_customers))
        .route("/customers", get(list_customers).post(create_customer))
        .route("/customers/:customer_id", get(customer_detail))
        .route("/customers/:customer_id/payments", post(record_payment))
        .route(
            "/customers/:customer_id/edit",
            get(edit_customer_form).post(update_customer),
        )
        .route("/customers/:customer_id/due", post(adjust_due))
        .route("/customers/:customer_id/delete", post(delete_customer))
        .route("/api/customers", get(list_customers_json))
        // Legacy positional endpoints for compatibility
        .route("/add_customer", post(create_customer))
        .route("/customer/:index", get(legacy_customer_detail))
        .route("/make_payment/:index", post(legacy_record_payment))
        .route(
            "/update_customer/:index",
            get(legacy_edit_customer_form).post(legacy_update_customer),
        )
        .route("/delete_customer/:index", post(legacy_delete_customer))
}

/// Parse an id path segment. Anything that is not an id names no customer.
fn customer_by_id(raw: &str) -> AppResult<CustomerRef> {
    raw.parse::<CustomerId>()
        .map(CustomerRef::Id)
        .map_err(|_| AppError::CustomerNotFound(raw.to_string()))
}

/// Parse a positional path segment
fn customer_by_index(raw: &str) -> AppResult<CustomerRef> {
    raw.parse::<usize>()
        .map(CustomerRef::Position)
        .map_err(|_| AppError::CustomerNotFound(raw.to_string()))
}

fn back_to_list() -> Redirect {
    Redirect::to("/")
}

// =========================================================================
// Shared route bodies
// =========================================================================

async fn render_detail(ledger: &SharedLedger, customer: CustomerRef) -> AppResult<Html<String>> {
    let info = ledger.read().await.get(customer)?;
    Ok(Html(views::customer_detail(&info)))
}

async fn render_edit_form(ledger: &SharedLedger, customer: CustomerRef) -> AppResult<Html<String>> {
    let info = ledger.read().await.get(customer)?;
    Ok(Html(views::edit_customer_form(&info)))
}

async fn apply_payment(
    ledger: SharedLedger,
    customer: CustomerRef,
    form: PaymentForm,
) -> AppResult<Redirect> {
    let command = RecordPaymentCommand::new(
        customer,
        form.payment_amount,
        form.payment_date,
        form.payment_method,
    );
    PaymentHandler::new(ledger).execute(command).await?;
    Ok(back_to_list())
}

async fn apply_update(
    ledger: SharedLedger,
    customer: CustomerRef,
    form: UpdateCustomerForm,
) -> AppResult<Redirect> {
    let changes = CustomerChanges::from_form(
        form.first_name,
        form.last_name,
        form.address,
        form.phone_number,
    );
    UpdateCustomerHandler::new(ledger)
        .execute(UpdateCustomerCommand::new(customer, changes))
        .await?;
    Ok(back_to_list())
}

async fn apply_delete(ledger: SharedLedger, customer: CustomerRef) -> AppResult<Redirect> {
    DeleteCustomerHandler::new(ledger)
        .execute(DeleteCustomerCommand::new(customer))
        .await?;
    Ok(back_to_list())
}

// =========================================================================
// GET / and GET /customers
// =========================================================================

/// List all customers
async fn list_customers(State(ledger): State<SharedLedger>) -> Html<String> {
    let customers = ledger.read().await.list_customers();
    Html(views::customer_list(&customers))
}

/// List all customers as JSON
async fn list_customers_json(State(ledger): State<SharedLedger>) -> Json<Vec<CustomerInfo>> {
    Json(ledger.read().await.list_customers())
}

// =========================================================================
// POST /customers
// =========================================================================

/// Add a customer
async fn create_customer(
    State(ledger): State<SharedLedger>,
    Form(form): Form<CustomerForm>,
) -> AppResult<Redirect> {
    let details = CustomerDetails {
        first_name: form.first_name,
        last_name: form.last_name,
        address: form.address,
        phone_number: form.phone_number,
    };

    CreateCustomerHandler::new(ledger)
        .execute(AddCustomerCommand::new(details, form.due_amount))
        .await?;

    Ok(back_to_list())
}

// =========================================================================
// /customers/:customer_id
// =========================================================================

async fn customer_detail(
    State(ledger): State<SharedLedger>,
    Path(customer_id): Path<String>,
) -> AppResult<Html<String>> {
    render_detail(&ledger, customer_by_id(&customer_id)?).await
}

async fn record_payment(
    State(ledger): State<SharedLedger>,
    Path(customer_id): Path<String>,
    Form(form): Form<PaymentForm>,
) -> AppResult<Redirect> {
    apply_payment(ledger, customer_by_id(&customer_id)?, form).await
}

async fn edit_customer_form(
    State(ledger): State<SharedLedger>,
    Path(customer_id): Path<String>,
) -> AppResult<Html<String>> {
    render_edit_form(&ledger, customer_by_id(&customer_id)?).await
}

async fn update_customer(
    State(ledger): State<SharedLedger>,
    Path(customer_id): Path<String>,
    Form(form): Form<UpdateCustomerForm>,
) -> AppResult<Redirect> {
    apply_update(ledger, customer_by_id(&customer_id)?, form).await
}

/// Overwrite the total due
async fn adjust_due(
    State(ledger): State<SharedLedger>,
    Path(customer_id): Path<String>,
    Form(form): Form<AdjustDueForm>,
) -> AppResult<Redirect> {
    let customer = customer_by_id(&customer_id)?;
    AdjustDueHandler::new(ledger)
        .execute(AdjustDueCommand::new(customer, form.due_amount))
        .await?;
    Ok(back_to_list())
}

async fn delete_customer(
    State(ledger): State<SharedLedger>,
    Path(customer_id): Path<String>,
) -> AppResult<Redirect> {
    apply_delete(ledger, customer_by_id(&customer_id)?).await
}

// =========================================================================
// Legacy endpoints
// =========================================================================

async fn legacy_customer_detail(
    State(ledger): State<SharedLedger>,
    Path(index): Path<String>,
) -> AppResult<Html<String>> {
    render_detail(&ledger, customer_by_index(&index)?).await
}

async fn legacy_record_payment(
    State(ledger): State<SharedLedger>,
    Path(index): Path<String>,
    Form(form): Form<PaymentForm>,
) -> AppResult<Redirect> {
    apply_payment(ledger, customer_by_index(&index)?, form).await
}

async fn legacy_edit_customer_form(
    State(ledger): State<SharedLedger>,
    Path(index): Path<String>,
) -> AppResult<Html<String>> {
    render_edit_form(&ledger, customer_by_index(&index)?).await
}

async fn legacy_update_customer(
    State(ledger): State<SharedLedger>,
    Path(index): Path<String>,
    Form(form): Form<UpdateCustomerForm>,
) -> AppResult<Redirect> {
    apply_update(ledger, customer_by_index(&index)?, form).await
}

async fn legacy_delete_customer(
    State(ledger): State<SharedLedger>,
    Path(index): Path<String>,
) -> AppResult<Redirect> {
    apply_delete(ledger, customer_by_index(&index)?).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_by_index() {
        assert_eq!(customer_by_index("2").unwrap(), CustomerRef::Position(2));
        assert!(matches!(
            customer_by_index("-1"),
            Err(AppError::CustomerNotFound(_))
        ));
    }

    #[test]
    fn test_customer_by_id() {
        let id = CustomerId::new();
        assert_eq!(
            customer_by_id(&id.to_string()).unwrap(),
            CustomerRef::Id(id)
        );
        assert!(customer_by_id("not-an-id").is_err());
    }
}
