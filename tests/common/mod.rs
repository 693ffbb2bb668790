use finup_mapping::domain::{AccountType, ChartAccount, ImportedAccount, Mapping};

/// A small chart of accounts in the shape the dashboard exports.
pub fn sample_chart() -> Vec<ChartAccount> {
    vec![
        ChartAccount::new("c-caixa", "Caixa", "1.1.01", AccountType::Asset).with_level(3),
        ChartAccount::new("c-bancos", "Bancos Conta Movimento", "1.1.02", AccountType::Asset)
            .with_level(3),
        ChartAccount::new("c-fornec", "Fornecedores", "2.1.01", AccountType::Liability)
            .with_level(3),
        ChartAccount::new("c-receita", "Receita Bruta", "3.1", AccountType::Revenue).with_level(2),
        ChartAccount::new("c-servicos", "Receita de Serviços", "3.2", AccountType::Revenue)
            .with_level(2),
        ChartAccount::new("c-energia", "Energia Elétrica", "4.2.05", AccountType::Expense)
            .with_level(3),
        ChartAccount::new("c-aluguel", "Aluguéis", "4.2.06", AccountType::Expense).with_level(3),
    ]
}

pub fn sample_imported() -> Vec<ImportedAccount> {
    vec![
        ImportedAccount::new("i-caixa", "CAIXA", "CX"),
        ImportedAccount::new("i-banco", "Banco Conta Movimento", "B01"),
        ImportedAccount::new("i-vendas", "Receita de Vendas", "R01"),
        ImportedAccount::new("i-energia", "Despesas com Energia Elétrica", "D07"),
        ImportedAccount::new("i-fornec", "Fornecedor", ""),
        ImportedAccount::new("i-diversos", "Diversos", "Z99"),
    ]
}

pub fn sample_history() -> Vec<Mapping> {
    vec![Mapping::new("old-energia", "c-energia", "Despesas com Energia", "ana")]
}
