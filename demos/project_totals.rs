use balancete_parser::{
    column_total, grouped_totals, process_and_clean, project_count, summarize_by_project,
    CleanerConfig, ParserConfig, RawGrid,
};

fn main() {
    let rows: Vec<Vec<&str>> = vec![
        vec!["Conta Corrente", "Alínea", "Descrição", "Valor Concedido", "Valor Pago"],
        vec!["", "", "PROJETO: Expansão Norte", "", ""],
        vec!["1001-2", "AL1", "Equipamentos", "R$ 10.000,00", "R$ 7.500,00"],
        vec!["1001-2", "AL2", "Serviços", "R$ 4.000,00", "R$ 1.200,00"],
        vec!["", "", "PROJETO: Laboratório – Química", "", ""],
        vec!["2002-3", "AL1", "Reagentes", "R$ 6.500,00", "R$ 6.000,00"],
        vec!["2002-3", "AL3", "Equipamentos", "R$ 2.000,00", "R$ 900,00"],
    ];
    let grid = RawGrid::from_values(
        rows.into_iter()
            .map(|row| row.into_iter().map(String::from).collect())
            .collect(),
    );

    let config = ParserConfig {
        account_column: "Conta Corrente".to_string(),
        category_column: "Alínea".to_string(),
        description_column: "Descrição".to_string(),
        granted_value_column: "Valor Concedido".to_string(),
    };

    let report = process_and_clean(&grid, &config, &CleanerConfig::standard(&config))
        .expect("pipeline should process the demo grid");

    println!("Projects: {}", project_count(&report.records));
    println!(
        "Granted total: {:.2} | Paid total: {:.2}",
        column_total(&report.records, "Valor Concedido"),
        column_total(&report.records, "Valor Pago"),
    );

    println!("\nPer-project totals:");
    for summary in summarize_by_project(&report.records, &["Valor Pago".to_string()]) {
        println!(
            " - {} ({} items): {:.2}",
            summary.project,
            summary.line_items,
            summary.totals.get("Valor Pago").copied().unwrap_or(0.0)
        );
    }

    println!("\nTop spend by description:");
    for (description, total) in grouped_totals(&report.records, "Descrição", "Valor Pago", 15) {
        println!(" - {}: {:.2}", description, total);
    }
}
