use super::TicketRenderer;
use crate::error::Result;
use crate::types::{ExamMetadata, TicketSet};

/// One A4 page per ticket with an approval header table.
pub struct LatexRenderer;

const PREAMBLE: &str = r"\documentclass[a4paper,12pt]{article}
\usepackage[utf8]{inputenc}
\usepackage[T2A,T1]{fontenc}
\usepackage[russian,english]{babel}
\usepackage{geometry}
\geometry{top=2cm, bottom=2cm, left=2cm, right=2cm}
\usepackage{setspace}
\onehalfspacing
\usepackage{array}
\usepackage{enumitem}
\setlist[enumerate]{leftmargin=0pt, label=\arabic*.}
\setlength{\arrayrulewidth}{0.5pt}
\begin{document}
";

/// Escapes characters with special meaning in LaTeX.
pub fn escape_latex(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str(r"\textbackslash{}"),
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '~' => escaped.push_str(r"\textasciitilde{}"),
            '^' => escaped.push_str(r"\textasciicircum{}"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn or_rule(value: &str, width: &str) -> String {
    if value.trim().is_empty() {
        format!(r"\makebox[{}]{{\hrulefill}}", width)
    } else {
        escape_latex(value)
    }
}

impl LatexRenderer {
    fn page(number: usize, questions: &[String], header: &PageHeader) -> String {
        let PageHeader {
            discipline,
            specialty,
            group,
            approver,
            teacher,
        } = header;

        let items: String = questions
            .iter()
            .map(|question| format!("  \\item {}\n", escape_latex(question)))
            .collect();

        format!(
            r"
\begin{{center}}
\begin{{tabular}}{{|p{{0.3\textwidth}}|p{{0.3\textwidth}}|p{{0.3\textwidth}}|}} \hline
\parbox{{0.3\textwidth}}{{\centering
Reviewed by the subject committee\\
Minutes No. \makebox[2cm]{{\hrulefill}} of \makebox[2cm]{{\hrulefill}}\\
\makebox[4cm]{{\hrulefill}}\\
committee chair}} &
\parbox{{0.3\textwidth}}{{\centering
Examination ticket No. {number}\\
Discipline: {discipline}\\
Specialty: {specialty}\\
Group: {group}}} &
\parbox{{0.3\textwidth}}{{\centering
APPROVED\\
Deputy director for academic affairs\\
\makebox[2cm]{{\hrulefill}} {approver}\\
\makebox[3cm]{{\hrulefill}} 20\makebox[1cm]{{\hrulefill}}}} \\ \hline
\end{{tabular}}
\end{{center}}

\vspace{{1cm}}

\begin{{enumerate}}
{items}  \item \hrulefill
\end{{enumerate}}

\vspace{{1cm}}

\noindent Teacher \hrulefill {teacher}

\newpage
"
        )
    }
}

/// Escaped header values shared by every page.
struct PageHeader {
    discipline: String,
    specialty: String,
    group: String,
    approver: String,
    teacher: String,
}

impl TicketRenderer for LatexRenderer {
    fn render(&self, tickets: &TicketSet, meta: &ExamMetadata) -> Result<Vec<u8>> {
        let header = PageHeader {
            discipline: escape_latex(&meta.discipline),
            specialty: escape_latex(&meta.specialty),
            group: or_rule(&meta.group, "2cm"),
            approver: or_rule(&meta.approver, "3cm"),
            teacher: or_rule(&meta.teacher, "4cm"),
        };

        let mut out = String::from(PREAMBLE);
        for (i, questions) in tickets.tickets.iter().enumerate() {
            out.push_str(&Self::page(i + 1, questions, &header));
        }
        out.push_str("\\end{document}\n");
        Ok(out.into_bytes())
    }

    fn file_name(&self) -> &'static str {
        "tickets.tex"
    }
}
