use balancete_parser::{
    process_report, ParserConfig, RawGrid, to_delimited_string, DEFAULT_SEPARATOR,
};

fn main() {
    let rows: Vec<Vec<&str>> = vec![
        vec!["Conta Corrente", "Alínea", "Descrição", "Valor Concedido", "Valor Pago"],
        vec!["PROJETOS VERBAS INTERNAS", "", "", "", ""],
        vec!["", "", "PROJETO: Expansão Norte", "", ""],
        vec!["1001-2", "AL1", "Equipamentos", "R$ 1.234,56", "R$ 1.000,00"],
        vec!["1001-2", "AL2", "Serviços de manutenção", "R$ 500,00", "R$ 250,00"],
        vec!["TOTAL:", "", "", "", ""],
        vec!["", "", "PROJETO: Manutenção Predial", "", ""],
        vec!["2002-3", "AL1", "Peças", "R$ 300,00", "R$ 300,00"],
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

    let outcome = process_report(&grid, &config).expect("parser should accept the demo grid");

    println!(
        "Extracted {} line items ({} warnings)",
        outcome.records.len(),
        outcome.warnings.len()
    );
    for record in &outcome.records {
        println!(
            " - row {} | {} | {:?}",
            record.source_row,
            record.project,
            record.cell("Descrição")
        );
    }

    let text = to_delimited_string(&grid.header(), &outcome.records, DEFAULT_SEPARATOR)
        .expect("export should serialize");
    println!("\nFlattened report:\n{}", text);
}
