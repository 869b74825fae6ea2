//! HTML views
//!
//! Server-rendered pages for the operator. Every piece of customer text goes
//! through `escape_html` before it lands in markup.

use std::fmt::Write;

use crate::domain::CustomerInfo;

/// Escape text for use in HTML element content and quoted attributes
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n<h1>{title}</h1>\n{body}</body>\n</html>\n",
        title = escape_html(title),
        body = body,
    )
}

fn full_name(customer: &CustomerInfo) -> String {
    escape_html(&format!("{} {}", customer.first_name, customer.last_name))
}

fn contact_inputs(out: &mut String, customer: Option<&CustomerInfo>) {
    let fields = [
        ("first_name", "First name", customer.map(|c| c.first_name.as_str())),
        ("last_name", "Last name", customer.map(|c| c.last_name.as_str())),
        ("address", "Address", customer.map(|c| c.address.as_str())),
        ("phone_number", "Phone number", customer.map(|c| c.phone_number.as_str())),
    ];
    for (name, label, value) in fields {
        let _ = writeln!(
            out,
            "<label>{label} <input type=\"text\" name=\"{name}\" value=\"{value}\"></label><br>",
            value = escape_html(value.unwrap_or_default()),
        );
    }
}

/// List of all customers, plus the add-customer form
pub fn customer_list(customers: &[CustomerInfo]) -> String {
    let mut body = String::new();

    if customers.is_empty() {
        body.push_str("<p>No customers yet.</p>\n");
    } else {
        body.push_str("<table>\n<tr><th>#</th><th>Name</th><th>Address</th><th>Phone</th><th>Total due</th><th>Payments</th><th></th></tr>\n");
        for (index, customer) in customers.iter().enumerate() {
            let _ = writeln!(
                body,
                "<tr><td>{index}</td><td>{name}</td><td>{address}</td><td>{phone}</td><td>{due}</td><td>{payments}</td><td><a href=\"/customers/{id}\">View</a> <a href=\"/customers/{id}/edit\">Edit</a></td></tr>",
                name = full_name(customer),
                address = escape_html(&customer.address),
                phone = escape_html(&customer.phone_number),
                due = customer.total_due,
                payments = customer.payments.len(),
                id = customer.id,
            );
        }
        body.push_str("</table>\n");
    }

    body.push_str("<h2>Add customer</h2>\n<form method=\"post\" action=\"/customers\">\n");
    contact_inputs(&mut body, None);
    body.push_str("<label>Amount due <input type=\"text\" name=\"due_amount\"></label><br>\n<button type=\"submit\">Add</button>\n</form>\n");

    layout("Customers", &body)
}

/// One customer's details, payment history and payment form
pub fn customer_detail(customer: &CustomerInfo) -> String {
    let mut body = String::new();

    let _ = writeln!(
        body,
        "<p>Name: {name}</p>\n<p>Address: {address}</p>\n<p>Phone: {phone}</p>\n<p>Total due: {due}</p>\n<p>Remaining balance: {remaining}</p>",
        name = full_name(customer),
        address = escape_html(&customer.address),
        phone = escape_html(&customer.phone_number),
        due = customer.total_due,
        remaining = customer.remaining_balance,
    );

    body.push_str("<h2>Payments</h2>\n");
    if customer.payments.is_empty() {
        body.push_str("<p>No payments recorded.</p>\n");
    } else {
        body.push_str("<table>\n<tr><th>Date</th><th>Amount</th><th>Method</th></tr>\n");
        for payment in &customer.payments {
            let _ = writeln!(
                body,
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                payment.date,
                payment.amount,
                escape_html(&payment.method),
            );
        }
        body.push_str("</table>\n");
    }

    let _ = write!(
        body,
        "<h2>Record payment</h2>\n<form method=\"post\" action=\"/customers/{id}/payments\">\n<label>Amount <input type=\"text\" name=\"payment_amount\"></label><br>\n<label>Date <input type=\"date\" name=\"payment_date\" placeholder=\"YYYY-MM-DD\"></label><br>\n<label>Method <input type=\"text\" name=\"payment_method\"></label><br>\n<button type=\"submit\">Pay</button>\n</form>\n\
         <h2>Adjust amount due</h2>\n<form method=\"post\" action=\"/customers/{id}/due\">\n<label>Amount due <input type=\"text\" name=\"due_amount\" value=\"{due}\"></label><br>\n<button type=\"submit\">Set</button>\n</form>\n\
         <p><a href=\"/customers/{id}/edit\">Edit details</a></p>\n<form method=\"post\" action=\"/customers/{id}/delete\"><button type=\"submit\">Delete customer</button></form>\n<p><a href=\"/\">Back to list</a></p>\n",
        id = customer.id,
        due = customer.total_due,
    );

    layout(&format!("{} {}", customer.first_name, customer.last_name), &body)
}

/// Edit form for contact details, pre-filled with the current values
pub fn edit_customer_form(customer: &CustomerInfo) -> String {
    let mut body = String::new();
    let _ = writeln!(
        body,
        "<form method=\"post\" action=\"/customers/{}/edit\">",
        customer.id
    );
    contact_inputs(&mut body, Some(customer));
    body.push_str("<button type=\"submit\">Save</button>\n</form>\n<p><a href=\"/\">Back to list</a></p>\n");

    layout("Update customer", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Balance, Customer, CustomerDetails};

    fn sample(first_name: &str) -> CustomerInfo {
        Customer::create(
            CustomerDetails {
                first_name: first_name.to_string(),
                last_name: "Doe".to_string(),
                address: "1 Elm St".to_string(),
                phone_number: "555-1234".to_string(),
            },
            Balance::zero(),
        )
        .info()
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<b>\"Tom\" & 'Jerry'</b>"),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#x27;Jerry&#x27;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_list_escapes_customer_text() {
        let page = customer_list(&[sample("<script>")]);
        assert!(page.contains("&lt;script&gt; Doe"));
        assert!(!page.contains("<script>"));
    }

    #[test]
    fn test_empty_list_still_offers_add_form() {
        let page = customer_list(&[]);
        assert!(page.contains("No customers yet."));
        assert!(page.contains("name=\"due_amount\""));
    }

    #[test]
    fn test_detail_links_use_stable_id() {
        let customer = sample("Jane");
        let page = customer_detail(&customer);
        assert!(page.contains(&format!("/customers/{}/payments", customer.id)));
        assert!(page.contains("Total due: 0.00"));
    }

    #[test]
    fn test_edit_form_prefilled() {
        let page = edit_customer_form(&sample("Jane"));
        assert!(page.contains("value=\"Jane\""));
        assert!(page.contains("value=\"555-1234\""));
    }
}
