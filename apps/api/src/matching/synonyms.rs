//! Synonym / alias table for technical vocabulary.
//!
//! Each row is a canonical term followed by the spellings candidates and
//! recruiters commonly use for it. Lookup is symmetric: any spelling in a row
//! discovers the whole row. The table is compiled in and never mutated; the
//! lookup indexes over it are built once on first use and only read after
//! that, so concurrent readers need no synchronization. Extending the table
//! only means adding rows here.

use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

pub const SYNONYMS: &[(&str, &[&str])] = &[
    (
        "javascript",
        &[
            "js", "ecmascript", "es6", "es2015", "es2016", "es2017", "es2018", "es2019", "es2020",
            "es2021",
        ],
    ),
    ("typescript", &["ts"]),
    ("python", &["py", "python3", "python2"]),
    ("java", &["jvm", "java8", "java11", "java17", "java21"]),
    (
        "spring boot",
        &["spring", "springframework", "springboot", "spring mvc", "spring framework"],
    ),
    ("react", &["reactjs", "react.js", "react native", "reactnative"]),
    ("angular", &["angularjs", "angular.js", "ng"]),
    ("vue", &["vuejs", "vue.js", "vue3", "vue2", "nuxt", "nuxtjs"]),
    ("node.js", &["nodejs", "node", "express", "expressjs"]),
    ("mongodb", &["mongo", "nosql", "document db"]),
    ("postgresql", &["postgres", "psql", "pgsql"]),
    ("mysql", &["mariadb", "sql", "rdbms"]),
    ("sql", &["plsql", "tsql", "sqlite", "database"]),
    ("docker", &["containerization", "container", "dockerfile"]),
    ("kubernetes", &["k8s", "helm", "kubectl", "orchestration"]),
    ("git", &["github", "gitlab", "bitbucket", "version control", "vcs"]),
    (
        "rest api",
        &["rest", "restful", "http api", "api", "web service", "webservice"],
    ),
    ("graphql", &["gql"]),
    (
        "machine learning",
        &[
            "ml",
            "deep learning",
            "neural network",
            "ai",
            "artificial intelligence",
            "sklearn",
            "tensorflow",
            "pytorch",
            "keras",
        ],
    ),
    (
        "devops",
        &[
            "ci/cd",
            "cicd",
            "jenkins",
            "github actions",
            "gitlab ci",
            "teamcity",
            "circle ci",
        ],
    ),
    ("linux", &["unix", "bash", "shell", "ubuntu", "debian", "centos"]),
    ("c#", &["csharp", ".net", "dotnet", "asp.net", "aspnet"]),
    ("php", &["laravel", "symfony", "composer"]),
    ("html", &["html5", "markup"]),
    ("css", &["css3", "sass", "scss", "less", "tailwind", "bootstrap"]),
    (
        "aws",
        &["amazon web services", "ec2", "s3", "lambda", "rds", "cloudformation"],
    ),
    ("azure", &["microsoft azure", "azure devops"]),
    (
        "gcp",
        &["google cloud", "google cloud platform", "bigquery", "cloud run"],
    ),
    ("android", &["kotlin", "android studio", "android sdk"]),
    ("ios", &["swift", "objective-c", "xcode", "swiftui"]),
    ("flutter", &["dart"]),
    ("redux", &["ngrx", "vuex", "state management"]),
    ("hibernate", &["jpa", "orm", "entity framework"]),
    ("microservices", &["micro services", "service mesh", "istio"]),
    ("agile", &["scrum", "kanban", "sprint", "jira", "confluence"]),
];

/// Canonical key → its row in `SYNONYMS`.
static CANONICAL_INDEX: LazyLock<HashMap<&'static str, usize>> = LazyLock::new(|| {
    SYNONYMS
        .iter()
        .enumerate()
        .map(|(row, (canonical, _))| (*canonical, row))
        .collect()
});

/// Alias → every row listing it, in table order.
static ALIAS_INDEX: LazyLock<HashMap<&'static str, Vec<usize>>> = LazyLock::new(|| {
    let mut index: HashMap<&'static str, Vec<usize>> = HashMap::new();
    for (row, (_, aliases)) in SYNONYMS.iter().enumerate() {
        for alias in aliases.iter() {
            index.entry(*alias).or_default().push(row);
        }
    }
    index
});

/// Aliases registered directly under a canonical key, if `term` is one.
pub fn direct_aliases(term: &str) -> Option<&'static [&'static str]> {
    CANONICAL_INDEX.get(term).map(|&row| SYNONYMS[row].1)
}

/// Every spelling `term` is related to, in table order.
///
/// Yields the aliases of `term` when it is a canonical key, then, for every
/// row listing `term` as an alias, that row's canonical key followed by all
/// of its aliases. The output may contain `term` itself and duplicates.
pub fn related_terms(term: &str) -> impl Iterator<Item = &'static str> {
    let direct = direct_aliases(term).unwrap_or(&[]).iter().copied();
    let rows: &'static [usize] = ALIAS_INDEX.get(term).map(Vec::as_slice).unwrap_or(&[]);
    let reverse = rows.iter().flat_map(|&row| {
        let (canonical, aliases) = SYNONYMS[row];
        std::iter::once(canonical).chain(aliases.iter().copied())
    });
    direct.chain(reverse)
}

/// Adds every related spelling of `term` to `out`.
pub fn expand_aliases(term: &str, out: &mut BTreeSet<String>) {
    for related in related_terms(term) {
        out.insert(related.to_string());
    }
}

/// The full expansion of `term` as a fresh set.
pub fn aliases_of(term: &str) -> BTreeSet<String> {
    let mut out = BTreeSet::new();
    expand_aliases(term, &mut out);
    out
}
