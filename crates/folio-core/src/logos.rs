//! Technology name to logo URL resolution.
//!
//! The table is ordered. When two keys fold to the same lowercase form, the
//! case-insensitive pass returns the one declared first.

pub const FALLBACK_LOGO_URL: &str = "https://cdn.jsdelivr.net/npm/simple-icons@v9/icons/code.svg";

const POWER_BI: &str = "https://upload.wikimedia.org/wikipedia/commons/c/cf/New_Power_BI_Logo.svg";

pub const TECH_LOGOS: &[(&str, &str)] = &[
    ("Python", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/python/python-original.svg"),
    ("SQL", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/mysql/mysql-original.svg"),
    ("MySQL", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/mysql/mysql-original.svg"),
    ("PostgreSQL", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/postgresql/postgresql-original.svg"),
    ("Pandas", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/pandas/pandas-original.svg"),
    ("NumPy", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/numpy/numpy-original.svg"),
    ("Matplotlib", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/matplotlib/matplotlib-original.svg"),
    ("Seaborn", "https://seaborn.pydata.org/_images/logo-mark-lightbg.svg"),
    ("Scikit-learn", "https://upload.wikimedia.org/wikipedia/commons/0/05/Scikit_learn_logo_small.svg"),
    ("TensorFlow", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/tensorflow/tensorflow-original.svg"),
    ("Keras", "https://upload.wikimedia.org/wikipedia/commons/a/ae/Keras_logo.svg"),
    ("Flask", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/flask/flask-original.svg"),
    ("Django", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/django/django-plain.svg"),
    ("Tableau", "https://cdn.worldvectorlogo.com/logos/tableau-software.svg"),
    ("PowerBI", POWER_BI),
    ("Power BI", POWER_BI),
    ("Excel", "https://upload.wikimedia.org/wikipedia/commons/3/34/Microsoft_Office_Excel_%282019%E2%80%93present%29.svg"),
    ("Jupyter", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/jupyter/jupyter-original.svg"),
    ("Git", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/git/git-original.svg"),
    ("GitHub", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/github/github-original.svg"),
    ("Docker", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/docker/docker-original.svg"),
    ("AWS", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/amazonwebservices/amazonwebservices-original-wordmark.svg"),
    ("Azure", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/azure/azure-original.svg"),
    ("R", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/r/r-original.svg"),
    ("Java", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/java/java-original.svg"),
    ("JavaScript", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/javascript/javascript-original.svg"),
    ("HTML", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/html5/html5-original.svg"),
    ("CSS", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/css3/css3-original.svg"),
    ("React", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/react/react-original.svg"),
    ("MongoDB", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/mongodb/mongodb-original.svg"),
    ("Spark", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/apachespark/apachespark-original.svg"),
    ("Hadoop", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/hadoop/hadoop-original.svg"),
    ("Kaggle", "https://cdn4.iconfinder.com/data/icons/logos-and-brands/512/189_Kaggle_logo_logos-512.png"),
];

/// Capability handed to the page renderer for turning technology names into icons.
pub trait LogoLookup: Send + Sync {
    fn logo_url(&self, name: &str) -> &str;
}

#[derive(Debug, Clone)]
pub struct LogoResolver {
    entries: Vec<LogoEntry>,
    fallback: String,
}

#[derive(Debug, Clone)]
struct LogoEntry {
    name: &'static str,
    folded: String,
    url: &'static str,
}

impl LogoResolver {
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_table(TECH_LOGOS, FALLBACK_LOGO_URL)
    }

    #[must_use]
    pub fn from_table(table: &[(&'static str, &'static str)], fallback: &str) -> Self {
        let entries = table
            .iter()
            .map(|&(name, url)| LogoEntry {
                name,
                folded: name.to_lowercase(),
                url,
            })
            .collect();
        Self {
            entries,
            fallback: fallback.to_string(),
        }
    }

    #[must_use]
    pub fn resolve(&self, name: &str) -> &str {
        if let Some(entry) = self.entries.iter().find(|entry| entry.name == name) {
            return entry.url;
        }
        let folded = name.to_lowercase();
        self.entries
            .iter()
            .find(|entry| entry.folded == folded)
            .map_or(self.fallback.as_str(), |entry| entry.url)
    }

}

impl Default for LogoResolver {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LogoLookup for LogoResolver {
    fn logo_url(&self, name: &str) -> &str {
        self.resolve(name)
    }
}
