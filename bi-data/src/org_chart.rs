//! Person-details CSV parsing, buying-role classification and the reporting
//! tree for the Buying Group view.

use anyhow::Context;
use bi_model::org_chart::OrgPerson;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Field {
    Name,
    FirstName,
    LastName,
    Title,
    Department,
    Level,
    ReportsTo,
    Email,
    Linkedin,
    Location,
}

fn normalize_header(header: &str) -> String {
    header
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase()
}

fn header_field(header: &str) -> Option<Field> {
    let field = match normalize_header(header).as_str() {
        "name" | "fullname" | "personname" | "employeename" => Field::Name,
        "firstname" => Field::FirstName,
        "lastname" | "surname" => Field::LastName,
        "title" | "designation" | "jobtitle" | "position" => Field::Title,
        "department" | "function" | "team" => Field::Department,
        "level" | "seniority" | "managementlevel" => Field::Level,
        "reportsto" | "manager" | "managername" | "reportingto" => Field::ReportsTo,
        "email" | "emailaddress" => Field::Email,
        "linkedin" | "linkedinurl" | "linkedinprofile" => Field::Linkedin,
        "location" | "city" | "country" => Field::Location,
        _ => return None,
    };
    Some(field)
}

fn column_map(headers: &StringRecord) -> HashMap<Field, usize> {
    let mut columns = HashMap::new();
    for (i, header) in headers.iter().enumerate() {
        if let Some(field) = header_field(header) {
            // first matching column wins
            columns.entry(field).or_insert(i);
        }
    }
    columns
}

/// Parse the person-details CSV into people.
///
/// Headers are matched case- and spacing-insensitively against known aliases;
/// unknown columns are ignored. When there is no name column the name is
/// built from first + last name. Rows without a name are skipped.
pub fn parse_org_chart_csv(text: &str) -> anyhow::Result<Vec<OrgPerson>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let headers = rdr.headers().context("person details CSV has no header row")?.clone();
    let columns = column_map(&headers);
    if !columns.contains_key(&Field::Name) && !columns.contains_key(&Field::FirstName) {
        anyhow::bail!("person details CSV has no name column");
    }

    let mut people = Vec::new();
    for (line, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("malformed person row {}", line + 2))?;
        let get = |field: Field| -> String {
            columns
                .get(&field)
                .and_then(|&i| record.get(i))
                .unwrap_or("")
                .to_string()
        };

        let mut name = get(Field::Name);
        if name.is_empty() {
            name = [get(Field::FirstName), get(Field::LastName)]
                .iter()
                .filter(|s| !s.is_empty())
                .cloned()
                .collect::<Vec<_>>()
                .join(" ");
        }
        if name.is_empty() {
            continue;
        }

        people.push(OrgPerson {
            name,
            title: get(Field::Title),
            department: get(Field::Department),
            level: get(Field::Level),
            reports_to: get(Field::ReportsTo),
            email: get(Field::Email),
            linkedin: get(Field::Linkedin),
            location: get(Field::Location),
        });
    }

    log::info!("[BI] org chart: parsed {} people", people.len());
    Ok(people)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BuyingRole {
    DecisionMaker,
    Influencer,
    User,
}

impl BuyingRole {
    pub const ALL: [BuyingRole; 3] = [BuyingRole::DecisionMaker, BuyingRole::Influencer, BuyingRole::User];

    pub fn label(&self) -> &'static str {
        match self {
            BuyingRole::DecisionMaker => "Decision Maker",
            BuyingRole::Influencer => "Influencer",
            BuyingRole::User => "User",
        }
    }
}

impl fmt::Display for BuyingRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const DECISION_MAKER_WORDS: [&str; 10] = [
    "chief", "vp", "vice president", "head", "director", "owner", "founder", "president", "partner",
    "svp",
];
const INFLUENCER_WORDS: [&str; 6] = ["manager", "lead", "architect", "principal", "senior", "specialist"];

fn has_word(text: &str, word: &str) -> bool {
    // match whole words so "lead" does not hit "leadership" and "vp" does not hit "mvp"
    text.split(|c: char| !c.is_ascii_alphanumeric())
        .collect::<Vec<_>>()
        .windows(word.split(' ').count())
        .any(|w| w.join(" ") == word)
}

fn is_c_level(title: &str) -> bool {
    title
        .split(|c: char| !c.is_ascii_alphanumeric())
        .any(|w| w.len() == 3 && w.starts_with('c') && w.ends_with('o'))
}

/// Classify a person by title (falling back to level).
pub fn buying_role(person: &OrgPerson) -> BuyingRole {
    let text = format!("{} {}", person.title, person.level).to_lowercase();
    if is_c_level(&text) || DECISION_MAKER_WORDS.iter().any(|w| has_word(&text, w)) {
        BuyingRole::DecisionMaker
    } else if INFLUENCER_WORDS.iter().any(|w| has_word(&text, w)) {
        BuyingRole::Influencer
    } else {
        BuyingRole::User
    }
}

/// People grouped by role, in role order; empty roles are omitted.
pub fn buying_group(people: &[OrgPerson]) -> Vec<(BuyingRole, Vec<&OrgPerson>)> {
    BuyingRole::ALL
        .into_iter()
        .map(|role| {
            let members: Vec<&OrgPerson> = people.iter().filter(|p| buying_role(p) == role).collect();
            (role, members)
        })
        .filter(|(_, members)| !members.is_empty())
        .collect()
}

/// A person with their direct reports.
#[derive(Debug, Clone, PartialEq)]
pub struct OrgNode {
    pub person: OrgPerson,
    pub reports: Vec<OrgNode>,
}

impl OrgNode {
    /// Number of people in this subtree, including this one.
    pub fn size(&self) -> usize {
        1 + self.reports.iter().map(OrgNode::size).sum::<usize>()
    }

    /// Indented text rendering, one person per line.
    pub fn render(&self, depth: usize, out: &mut String) {
        out.push_str(&"  ".repeat(depth));
        out.push_str(&self.person.name);
        if !self.person.title.is_empty() {
            out.push_str(" (");
            out.push_str(&self.person.title);
            out.push(')');
        }
        out.push('\n');
        for report in &self.reports {
            report.render(depth + 1, out);
        }
    }
}

/// Link people to their managers by (case-insensitive) name.
///
/// People whose manager is blank, unknown or themselves are roots. In a
/// reporting cycle the member appearing first in the input becomes a root.
/// Input order is kept among siblings and roots.
pub fn build_org_tree(people: &[OrgPerson]) -> Vec<OrgNode> {
    let by_name: HashMap<String, usize> = people
        .iter()
        .enumerate()
        .rev()
        .map(|(i, p)| (p.name.trim().to_lowercase(), i))
        .collect();

    let mut parent: Vec<Option<usize>> = people
        .iter()
        .enumerate()
        .map(|(i, p)| {
            by_name
                .get(&p.reports_to.trim().to_lowercase())
                .copied()
                .filter(|&m| m != i)
        })
        .collect();

    // Break cycles: walk up from each person; on revisiting a node, cut the
    // lowest index in the loop.
    for start in 0..people.len() {
        let mut path = vec![start];
        let mut current = start;
        while let Some(next) = parent[current] {
            if let Some(pos) = path.iter().position(|&p| p == next) {
                if let Some(&cut) = path[pos..].iter().min() {
                    parent[cut] = None;
                }
                break;
            }
            path.push(next);
            current = next;
        }
    }

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); people.len()];
    let mut roots = Vec::new();
    for (i, p) in parent.iter().enumerate() {
        match p {
            Some(m) => children[*m].push(i),
            None => roots.push(i),
        }
    }

    fn build(i: usize, people: &[OrgPerson], children: &[Vec<usize>]) -> OrgNode {
        OrgNode {
            person: people[i].clone(),
            reports: children[i].iter().map(|&c| build(c, people, children)).collect(),
        }
    }

    roots.into_iter().map(|r| build(r, people, &children)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Name,Designation,Department,Reports To,Email,LinkedIn URL,Location,Notes
Ana Ruiz,Chief Marketing Officer,Marketing,,ana@acme.com,https://linkedin.com/in/ana,Austin,
Ben Ode,\"Director, Demand Gen\",Marketing,Ana Ruiz,ben@acme.com,,\"Austin, TX\",x
Cy Park,Marketing Ops Manager,Marketing,ben ode,,,,
Di Lo,Analyst,Marketing,Cy Park,,,,
,Ghost,,,,,,
";

    fn person(name: &str, title: &str, reports_to: &str) -> OrgPerson {
        OrgPerson {
            name: name.to_string(),
            title: title.to_string(),
            reports_to: reports_to.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_parses_aliases_and_quoted_commas() {
        let people = parse_org_chart_csv(SAMPLE).unwrap();
        assert_eq!(people.len(), 4);
        assert_eq!(people[1].title, "Director, Demand Gen");
        assert_eq!(people[1].location, "Austin, TX");
        assert_eq!(people[1].reports_to, "Ana Ruiz");
        assert_eq!(people[0].linkedin, "https://linkedin.com/in/ana");
        assert_eq!(people[0].email, "ana@acme.com");
    }

    #[test]
    fn test_first_and_last_name_fallback() {
        let csv = "First Name,Last Name,Job Title\nAna,Ruiz,CEO\nSolo,,Engineer\n";
        let people = parse_org_chart_csv(csv).unwrap();
        assert_eq!(people[0].name, "Ana Ruiz");
        assert_eq!(people[1].name, "Solo");
        assert_eq!(people[0].title, "CEO");
    }

    #[test]
    fn test_missing_name_column_is_an_error() {
        assert!(parse_org_chart_csv("Title,Email\nCEO,a@b.c\n").is_err());
    }

    #[test]
    fn test_roles_from_titles() {
        assert_eq!(buying_role(&person("a", "CTO", "")), BuyingRole::DecisionMaker);
        assert_eq!(buying_role(&person("a", "VP, Sales", "")), BuyingRole::DecisionMaker);
        assert_eq!(buying_role(&person("a", "Head of Growth", "")), BuyingRole::DecisionMaker);
        assert_eq!(buying_role(&person("a", "Team Lead", "")), BuyingRole::Influencer);
        assert_eq!(buying_role(&person("a", "Solutions Architect", "")), BuyingRole::Influencer);
        assert_eq!(buying_role(&person("a", "Leadership Program Analyst", "")), BuyingRole::User);
        assert_eq!(buying_role(&person("a", "MVP Engineer", "")), BuyingRole::User);
    }

    #[test]
    fn test_group_in_role_order() {
        let people = parse_org_chart_csv(SAMPLE).unwrap();
        let groups = buying_group(&people);
        let summary: Vec<(BuyingRole, usize)> = groups.iter().map(|(r, m)| (*r, m.len())).collect();
        assert_eq!(
            summary,
            vec![
                (BuyingRole::DecisionMaker, 2),
                (BuyingRole::Influencer, 1),
                (BuyingRole::User, 1)
            ]
        );
    }

    #[test]
    fn test_tree_links_case_insensitively() {
        let people = parse_org_chart_csv(SAMPLE).unwrap();
        let forest = build_org_tree(&people);
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].size(), 4);
        let mut text = String::new();
        forest[0].render(0, &mut text);
        assert_eq!(
            text,
            "Ana Ruiz (Chief Marketing Officer)\n  Ben Ode (Director, Demand Gen)\n    Cy Park (Marketing Ops Manager)\n      Di Lo (Analyst)\n"
        );
    }

    #[test]
    fn test_unknown_manager_and_self_reports_are_roots() {
        let people = vec![person("A", "", "Nobody"), person("B", "", "b"), person("C", "", "A")];
        let forest = build_org_tree(&people);
        let roots: Vec<_> = forest.iter().map(|n| n.person.name.as_str()).collect();
        assert_eq!(roots, vec!["A", "B"]);
        assert_eq!(forest[0].reports[0].person.name, "C");
    }

    #[test]
    fn test_cycles_are_cut() {
        let people = vec![person("A", "", "C"), person("B", "", "A"), person("C", "", "B")];
        let forest = build_org_tree(&people);
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].person.name, "A");
        assert_eq!(forest[0].size(), 3);
    }
}
