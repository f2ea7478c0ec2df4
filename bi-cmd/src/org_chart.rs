//! `org-chart`: a company's buying group and reporting tree from its
//! person details CSV.

use bi_data::org_chart::{build_org_tree, buying_group, parse_org_chart_csv};
use bi_model::client::ApiClient;
use bi_model::org_chart::OrgPerson;
use log::info;

/// Buying-role sections followed by the indented reporting tree.
pub fn render_report(company: &str, people: &[OrgPerson]) -> String {
    let mut out = format!("{} ({} people)\n", company, people.len());
    for (role, members) in buying_group(people) {
        out.push_str(&format!("\n{} ({})\n", role, members.len()));
        for person in members {
            if person.title.is_empty() {
                out.push_str(&format!("  {}\n", person.name));
            } else {
                out.push_str(&format!("  {} - {}\n", person.name, person.title));
            }
        }
    }
    let roots = build_org_tree(people);
    if !roots.is_empty() {
        out.push_str("\nReporting lines\n");
        for root in &roots {
            root.render(1, &mut out);
        }
    }
    out
}

pub async fn run_org_chart(client: &ApiClient, company: &str, out: Option<&str>) -> anyhow::Result<()> {
    let csv = client.org_chart_person_details(company).await?;
    if let Some(path) = out {
        std::fs::write(path, &csv)?;
        info!("[BI] saved person details for {} to {}", company, path);
    }
    let people = parse_org_chart_csv(&csv)?;
    info!("[BI] {}: parsed {} people", company, people.len());
    print!("{}", render_report(company, &people));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(name: &str, title: &str, reports_to: &str) -> OrgPerson {
        OrgPerson {
            name: name.to_string(),
            title: title.to_string(),
            reports_to: reports_to.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_render_report() {
        let people = vec![
            person("Ada", "Chief Executive Officer", ""),
            person("Bob", "Marketing Manager", "Ada"),
            person("Cy", "", "Bob"),
        ];
        let report = render_report("Acme", &people);
        assert!(report.starts_with("Acme (3 people)\n"));
        assert!(report.contains("  Ada - Chief Executive Officer\n"));
        assert!(report.contains("  Cy\n"));
        assert!(report.ends_with("Reporting lines\n  Ada (Chief Executive Officer)\n    Bob (Marketing Manager)\n      Cy\n"));
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_report("Nobody Inc", &[]), "Nobody Inc (0 people)\n");
    }
}
