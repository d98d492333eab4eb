//! 聚合计算
//!
//! 按账户汇总团队风险，并计算组织级健康度快照。

use crate::models::{Account, AccountSummary, Employee, HealthSnapshot};

/// 截断取整的平均值，空集合返回 0
pub fn truncated_mean(scores: impl IntoIterator<Item = u32>) -> u32 {
    let (sum, count) = scores
        .into_iter()
        .fold((0u64, 0u64), |(sum, count), score| {
            (sum + u64::from(score), count + 1)
        });

    if count == 0 {
        0
    } else {
        (sum / count) as u32
    }
}

/// 按账户目录顺序汇总团队规模、平均风险分与收入风险
pub fn summarize_accounts(accounts: &[Account], employees: &[Employee]) -> Vec<AccountSummary> {
    accounts
        .iter()
        .map(|account| {
            let team: Vec<&Employee> = employees
                .iter()
                .filter(|e| e.account == account.name)
                .collect();

            AccountSummary {
                name: account.name.clone(),
                total_revenue: account.revenue,
                renewal_date: account.renewal,
                team_size: team.len(),
                people_risk_score: truncated_mean(team.iter().map(|e| e.risk_score)),
                revenue_at_risk: team.iter().map(|e| e.revenue_at_risk).sum(),
            }
        })
        .collect()
}

/// 计算健康度快照
///
/// 收入风险总额取自账户汇总，而不是直接累加员工
pub fn health_snapshot(employees: &[Employee], accounts: &[AccountSummary]) -> HealthSnapshot {
    HealthSnapshot::new(
        truncated_mean(employees.iter().map(|e| e.risk_score)),
        employees.len(),
        accounts.iter().map(|a| a.revenue_at_risk).sum(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SeedCatalog;
    use crate::models::{Function, Geography, Origin};

    fn employee(id: &str, account: &str, risk_score: u32, revenue_at_risk: i64) -> Employee {
        Employee {
            id: id.to_string(),
            name: id.to_string(),
            role: "Consultant".to_string(),
            origin: Origin::Lv,
            function: Function::Delivery,
            geography: Geography::India,
            tenure: 1.0,
            risk_score,
            business_impact: 50,
            signals: vec![],
            account: account.to_string(),
            grade_mapping_status: None,
            revenue_at_risk,
        }
    }

    #[test]
    fn test_truncated_mean() {
        assert_eq!(truncated_mean(Vec::<u32>::new()), 0);
        assert_eq!(truncated_mean([50]), 50);
        assert_eq!(truncated_mean([50, 51]), 50);
        assert_eq!(truncated_mean([99, 100, 100]), 99);
    }

    #[test]
    fn test_summarize_accounts() {
        let catalog = SeedCatalog::default();
        let employees = vec![
            employee("a", "PepsiCo", 40, 100),
            employee("b", "PepsiCo", 61, 250),
            employee("c", "Bimbo", 90, 7),
        ];

        let summaries = summarize_accounts(&catalog.accounts, &employees);
        assert_eq!(summaries.len(), 6);
        assert_eq!(summaries[0].name, "PepsiCo");

        let pepsico = &summaries[0];
        assert_eq!(pepsico.team_size, 2);
        assert_eq!(pepsico.people_risk_score, 50);
        assert_eq!(pepsico.revenue_at_risk, 350);
        assert_eq!(pepsico.total_revenue, 2_800_000);

        // 没有成员的账户风险分为 0
        let kellanova = &summaries[1];
        assert_eq!(kellanova.team_size, 0);
        assert_eq!(kellanova.people_risk_score, 0);
        assert_eq!(kellanova.revenue_at_risk, 0);
    }

    #[test]
    fn test_health_snapshot() {
        let catalog = SeedCatalog::default();
        let employees = vec![
            employee("a", "PepsiCo", 40, 100),
            employee("b", "Unilever", 61, 250),
            employee("c", "Bimbo", 90, 7),
        ];
        let summaries = summarize_accounts(&catalog.accounts, &employees);

        let health = health_snapshot(&employees, &summaries);
        assert_eq!(health.talent, 63);
        assert_eq!(health.total_employees, 3);
        assert_eq!(health.total_revenue_at_risk, 357);
        assert_eq!(health.overall_score, 72);
        assert_eq!(health.culture, 71);
        assert_eq!(health.operations, 78);
        assert_eq!(health.cost, 74);
    }
}
