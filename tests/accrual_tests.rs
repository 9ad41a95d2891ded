use rental_core::portfolio::{
    generate_obligations, months_inclusive, MonthKey, Property, Tenant,
};
use uuid::Uuid;

fn rented_unit(rent: f64) -> Property {
    Property::new("Av. Rivadavia 1234", rent)
}

#[test]
fn month_range_is_inclusive_and_crosses_years() {
    let start = MonthKey::new(2024, 11).unwrap();
    let end = MonthKey::new(2025, 1).unwrap();
    let months: Vec<String> = months_inclusive(start, end)
        .map(|m| m.to_string())
        .collect();
    assert_eq!(months, vec!["2024-11", "2024-12", "2025-01"]);
}

#[test]
fn month_range_is_empty_when_end_precedes_start() {
    let start = MonthKey::new(2024, 5).unwrap();
    let end = MonthKey::new(2024, 2).unwrap();
    assert_eq!(months_inclusive(start, end).count(), 0);
}

#[test]
fn contract_spanning_partial_months_owes_each_whole_month() {
    let property = rented_unit(1000.0);
    let tenant = Tenant::new("Ana").with_contract(property.id, "2024-01-15", "2024-03-10");

    let obligations = generate_obligations(&[tenant.clone()], &[property]);

    let months: Vec<String> = obligations.iter().map(|o| o.month.to_string()).collect();
    assert_eq!(months, vec!["2024-01", "2024-02", "2024-03"]);
    assert!(obligations.iter().all(|o| o.tenant_id == tenant.id));
    assert!(obligations.iter().all(|o| o.amount == 1000.0));
}

#[test]
fn contract_inside_a_single_month_yields_one_obligation() {
    let property = rented_unit(750.0);
    let tenant = Tenant::new("Luis").with_contract(property.id, "2024-02-05", "2024-02-20");

    let obligations = generate_obligations(&[tenant], &[property]);

    assert_eq!(obligations.len(), 1);
    assert_eq!(obligations[0].month, MonthKey::new(2024, 2).unwrap());
    assert_eq!(obligations[0].amount, 750.0);
}

#[test]
fn obligation_count_matches_inclusive_month_count() {
    let cases = [
        ("2024-01-15", "2024-03-10", 3),
        ("2024-02-01", "2024-02-29", 1),
        ("2023-11-03", "2024-02-20", 4),
        ("2024-05-01", "2024-02-01", 0),
    ];

    for (start, end, expected) in cases {
        let property = rented_unit(500.0);
        let tenant = Tenant::new("Marta").with_contract(property.id, start, end);
        let obligations = generate_obligations(&[tenant], &[property]);
        assert_eq!(
            obligations.len(),
            expected,
            "window {start}..{end} should accrue {expected} months"
        );
    }
}

#[test]
fn tenants_without_contract_data_accrue_nothing() {
    let property = rented_unit(900.0);

    let unlinked = {
        let mut t = Tenant::new("Sin propiedad").with_contract(property.id, "2024-01-01", "2024-06-30");
        t.property_id = None;
        t
    };
    let no_start = {
        let mut t = Tenant::new("Sin inicio").with_contract(property.id, "2024-01-01", "2024-06-30");
        t.contract_start = None;
        t
    };
    let empty_end = {
        let mut t = Tenant::new("Sin fin").with_contract(property.id, "2024-01-01", "2024-06-30");
        t.contract_end = Some(String::new());
        t
    };
    let malformed = Tenant::new("Fecha rara").with_contract(property.id, "01/02/2024", "2024-06-30");
    let dangling = Tenant::new("Propiedad borrada").with_contract(
        Uuid::new_v4(),
        "2024-01-01",
        "2024-06-30",
    );

    let tenants = vec![unlinked, no_start, empty_end, malformed, dangling];
    assert!(generate_obligations(&tenants, &[property]).is_empty());
}

#[test]
fn output_keeps_tenant_order_and_reads_rent_per_tenant() {
    let cheap = rented_unit(800.0);
    let pricey = rented_unit(1500.0);
    let first = Tenant::new("Ana").with_contract(cheap.id, "2024-01-01", "2024-02-15");
    let second = Tenant::new("Luis").with_contract(pricey.id, "2023-12-10", "2024-01-05");

    let obligations = generate_obligations(
        &[first.clone(), second.clone()],
        &[cheap, pricey],
    );

    let rows: Vec<(Uuid, String, f64)> = obligations
        .iter()
        .map(|o| (o.tenant_id, o.month.to_string(), o.amount))
        .collect();
    assert_eq!(
        rows,
        vec![
            (first.id, "2024-01".to_string(), 800.0),
            (first.id, "2024-02".to_string(), 800.0),
            (second.id, "2023-12".to_string(), 1500.0),
            (second.id, "2024-01".to_string(), 1500.0),
        ]
    );
}

#[test]
fn degenerate_inputs_produce_empty_output() {
    assert!(generate_obligations(&[], &[]).is_empty());

    let tenant = Tenant::new("Nadie");
    assert!(generate_obligations(&[tenant], &[]).is_empty());
}
