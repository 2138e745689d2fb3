//! Integration tests for the HTML report produced during a walk

use super::test_utils::GitRepo;
use readme_scorer::config::ScoringConfig;
use readme_scorer::coverage::Coverage;
use readme_scorer::report::{HtmlReport, ReportBuilder};
use readme_scorer::tree::git::GitLsFiles;
use readme_scorer::tree::walker::CoverageWalker;

#[test]
fn test_report_mirrors_walk() {
    let Some(repo) = GitRepo::init() else { return };
    repo.write("a.py", "");
    repo.write("b.py", "");
    repo.write("README", "`a.py`\n");
    repo.write("docs/guide.md", "");
    repo.write("docs/img/logo.png", "");
    repo.track_all();

    let walker = CoverageWalker::new(GitLsFiles::new(), &ScoringConfig::default());
    let mut coverage = Coverage::new();
    let mut report = HtmlReport::with_prologue("<html><body>");
    walker
        .walk(repo.root(), &mut coverage, Some(&mut report))
        .unwrap();

    assert_eq!(report.layer(), 0);
    let doc = report.finalize(coverage.described(), coverage.found());
    let expected = "<html><body>\
<h2>README Coverage: 33% </h2><h3>Total Found=3, Total Described=1</h3>\n\
<h4 class='included_file'><pre>├──a.py</pre></h4>\n\
<h4 class='excluded_file'><pre>├──b.py</pre></h4>\n\
<h4 class='direct'><pre>├──docs</pre></h4>\n\
<h4 class='excluded_file'><pre>\t├──guide.md</pre></h4>\n\
<h4 class='direct'><pre>\t├──img</pre></h4>\n\
</body></html>";
    assert_eq!(doc, expected);
}
