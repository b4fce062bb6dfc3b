use crate::application::read_models::LicenseReportView;
use crate::license_report::domain::{DeniedPackageRow, LicenseAggregate, UnlicensedPackageRow};
use crate::ports::outbound::ReportFormatter;
use crate::shared::error::ConvertError;
use std::fmt::Write;

/// Markdown table header for the license summary
const LICENSE_TABLE_HEADER: &str = "| License | Risk | Denied packages |\n";

/// Markdown table separator line for the license summary
const LICENSE_TABLE_SEPARATOR: &str = "|---------|------|-----------------|\n";

/// Markdown table header for denied packages
const DENIED_TABLE_HEADER: &str = "| Name | Version | Type | Licenses |\n";

/// Markdown table separator line for denied packages
const DENIED_TABLE_SEPARATOR: &str = "|------|---------|------|----------|\n";

/// Markdown table header for unlicensed packages
const UNLICENSED_TABLE_HEADER: &str = "| Name | Version | Type |\n";

/// Markdown table separator line for unlicensed packages
const UNLICENSED_TABLE_SEPARATOR: &str = "|------|---------|------|\n";

/// MarkdownFormatter adapter for the Grant license report
///
/// Produces the collapsible-section layout consumers parse by section
/// title: metadata, summary counts, license summary, denied packages and
/// unlicensed packages, always in that order.
///
/// Every interpolated value is HTML-escaped since the sections live inside
/// `<details>` blocks; fixed text is written as-is.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes `& ' < > " +` and NUL for safe embedding in HTML text
    fn escape_html(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '&' => escaped.push_str("&amp;"),
                '\'' => escaped.push_str("&#39;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&#34;"),
                '+' => escaped.push_str("&#43;"),
                '\0' => escaped.push('\u{FFFD}'),
                other => escaped.push(other),
            }
        }
        escaped
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    /// Renders the title and metadata bullets
    fn render_header(&self, output: &mut String, view: &LicenseReportView) -> std::fmt::Result {
        let meta = &view.metadata;
        output.push_str("# Grant License Report\n\n");
        writeln!(
            output,
            "- **Tool:** {} {}",
            Self::escape_html(&meta.tool),
            Self::escape_html(&meta.version)
        )?;
        writeln!(output, "- **Status:** {}", Self::escape_html(&meta.status))?;
        writeln!(output, "- **Target:** {}", Self::escape_html(&meta.target_ref))?;
        output.push('\n');
        Ok(())
    }

    /// Renders the packages/licenses counts table
    fn render_summary(&self, output: &mut String, view: &LicenseReportView) -> std::fmt::Result {
        let pkgs = &view.package_counts;
        let lics = &view.license_counts;

        output.push_str("<details>\n");
        output.push_str(
            "<summary><strong>Summary</strong> \u{2013} packages & licenses counts</summary>\n\n",
        );
        output.push_str("| | Packages | Licenses |\n");
        output.push_str("|--|----------|----------|\n");
        writeln!(output, "| Total | {} | {} unique |", pkgs.total, lics.unique)?;
        writeln!(output, "| Allowed | {} | {} |", pkgs.allowed, lics.allowed)?;
        writeln!(output, "| Denied | {} | {} |", pkgs.denied, lics.denied)?;
        writeln!(output, "| Ignored | {} | - |", pkgs.ignored)?;
        writeln!(
            output,
            "| Unlicensed | {} | {} non-SPDX |",
            pkgs.unlicensed, lics.non_spdx
        )?;
        output.push_str("\n</details>\n\n");
        Ok(())
    }

    /// Renders the licenses-in-denied-packages section
    fn render_license_summary(
        &self,
        output: &mut String,
        licenses: &[LicenseAggregate],
    ) -> std::fmt::Result {
        output.push_str("<details>\n");
        writeln!(
            output,
            "<summary><strong>Licenses (summary)</strong> \u{2013} {} unique licenses in denied packages</summary>",
            licenses.len()
        )?;
        output.push('\n');
        output.push_str(LICENSE_TABLE_HEADER);
        output.push_str(LICENSE_TABLE_SEPARATOR);
        for license in licenses {
            writeln!(
                output,
                "| {} | {} | {} |",
                Self::escape_html(&license.id),
                Self::escape_html(&license.risk_category),
                license.count
            )?;
        }
        Self::close_section(output);
        output.push('\n');
        Ok(())
    }

    /// Renders the denied / non-compliant packages section
    fn render_denied_packages(
        &self,
        output: &mut String,
        packages: &[DeniedPackageRow],
    ) -> std::fmt::Result {
        output.push_str("<details>\n");
        writeln!(
            output,
            "<summary><strong>Denied / non-compliant packages</strong> ({}), sorted by license</summary>",
            packages.len()
        )?;
        output.push('\n');
        output.push_str(DENIED_TABLE_HEADER);
        output.push_str(DENIED_TABLE_SEPARATOR);
        for package in packages {
            writeln!(
                output,
                "| {} | {} | {} | {} |",
                Self::escape_html(&package.name),
                Self::escape_html(&package.version),
                Self::escape_html(&package.package_type),
                Self::escape_html(&package.license_list)
            )?;
        }
        Self::close_section(output);
        output.push('\n');
        Ok(())
    }

    /// Renders the unlicensed packages section
    fn render_unlicensed_packages(
        &self,
        output: &mut String,
        packages: &[UnlicensedPackageRow],
    ) -> std::fmt::Result {
        output.push_str("<details>\n");
        writeln!(
            output,
            "<summary><strong>Unlicensed packages</strong> ({}) \u{2013} no license info; review or add to policy</summary>",
            packages.len()
        )?;
        output.push('\n');
        output.push_str(UNLICENSED_TABLE_HEADER);
        output.push_str(UNLICENSED_TABLE_SEPARATOR);
        for package in packages {
            writeln!(
                output,
                "| {} | {} | {} |",
                Self::escape_html(&package.name),
                Self::escape_html(&package.version),
                Self::escape_html(&package.package_type)
            )?;
        }
        Self::close_section(output);
        Ok(())
    }

    /// Two blank lines after a table body, then the closing tag
    fn close_section(output: &mut String) {
        output.push_str("\n\n</details>\n");
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, view: &LicenseReportView) -> Result<String, ConvertError> {
        let mut output = String::new();

        self.render_header(&mut output, view)?;
        self.render_summary(&mut output, view)?;
        self.render_license_summary(&mut output, &view.license_summary)?;
        self.render_denied_packages(&mut output, &view.denied_packages)?;
        self.render_unlicensed_packages(&mut output, &view.unlicensed_packages)?;

        Ok(output)
    }
}
