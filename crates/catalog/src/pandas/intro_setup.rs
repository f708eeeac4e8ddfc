use course_core::model::{CodeSample, Lesson, PracticeItem, StartHere, Subsection};

pub(crate) fn lessons() -> Vec<Lesson> {
    vec![
        Lesson::new("pandas-intro-setup", "Section 1 — Intro & Setup (Pandas)")
            .with_summary("Why pandas, install steps, notebook/editor setup, quick CSV tour.")
            .with_duration(55)
            .with_content(
                "Start here. Create a venv, install pandas, choose Jupyter or VS Code, then read a small CSV, inspect with head/info/describe, make a simple selection, and save results. You’ll also learn the copies vs chained-assignment rule.",
            )
            .with_start_here(
                StartHere::new([
                    "Install pandas inside a per-project virtual environment.",
                    "Use JupyterLab (notebook) or VS Code (script) comfortably.",
                    "Read a CSV and inspect with head(), info(), describe().",
                    "Filter rows, select columns, and save to CSV.",
                    "Understand copies vs chained assignment to avoid warnings.",
                ])
                .with_prerequisites([
                    "Basic Python (variables, lists/dicts, files)",
                    "Python 3 installed on Windows/macOS/Linux",
                ])
                .with_resource(
                    "pandas — Getting started",
                    "https://pandas.pydata.org/docs/getting_started/index.html",
                )
                .with_resource("JupyterLab Install", "https://jupyter.org/install")
                .with_tip(
                    "Use `python -m pip install ...` so packages install to the interpreter in your venv. In notebooks, restart the kernel after installs.",
                ),
            )
            .with_subsection(
                Subsection::new(
                    "install-venv",
                    "Install pandas (venv)",
                    "Create and activate a virtual environment, then install pandas (and Jupyter if you want notebooks).",
                )
                .with_codes([
                    CodeSample::labeled(
                        "Windows (PowerShell)",
                        r#"python -m venv .venv
.\.venv\Scripts\Activate.ps1
python -m pip install --upgrade pip
python -m pip install pandas jupyterlab
python -c "import pandas as pd; print(pd.__version__)"   # verify"#,
                    ),
                    CodeSample::labeled(
                        "macOS / Linux",
                        r#"python3 -m venv .venv
source .venv/bin/activate
python -m pip install --upgrade pip
python -m pip install pandas jupyterlab
python -c "import pandas as pd; print(pd.__version__)"   # verify"#,
                    ),
                ]),
            )
            .with_subsection(
                Subsection::new(
                    "choose-editor",
                    "Pick your editor: Jupyter or VS Code",
                    "Jupyter is great for exploration; VS Code is great for scripts. Use either.",
                )
                .with_codes([
                    CodeSample::labeled(
                        "Jupyter basics",
                        r"# Launch:
jupyter lab
# New Notebook ▸ Python 3
# Run cells with Shift+Enter",
                    ),
                    CodeSample::labeled(
                        "VS Code basics",
                        r"# Create file: hello_pandas.py
# Run it from terminal in your venv:
python hello_pandas.py",
                    ),
                ]),
            )
            .with_subsection(
                Subsection::new(
                    "create-sample-data",
                    "Create a tiny dataset (people.csv)",
                    "Make a data/ folder and add people.csv with 3 columns: name, age, city.",
                )
                .with_codes([
                    CodeSample::labeled(
                        "CSV contents (copy/paste)",
                        r"# file: data/people.csv
name,age,city
Asha,12,Pune
Raj,19,Delhi
Mia,17,Goa
Lee,22,Pune
Zara,30,Bengaluru",
                    ),
                    CodeSample::labeled(
                        "Generate with pandas (optional)",
                        r#"import pandas as pd, pathlib
pathlib.Path("data").mkdir(exist_ok=True)
df = pd.DataFrame({
    "name": ["Asha","Raj","Mia","Lee","Zara"],
    "age":  [12,19,17,22,30],
    "city": ["Pune","Delhi","Goa","Pune","Bengaluru"]
})
df.to_csv("data/people.csv", index=False)"#,
                    ),
                ]),
            )
            .with_subsection(
                Subsection::new(
                    "quick-tour",
                    "Quick tour: read → inspect → summarize",
                    "Load the CSV into a DataFrame, peek at rows, and view types/summary.",
                )
                .with_codes([
                    CodeSample::labeled(
                        "Read & peek",
                        r#"import pandas as pd
df = pd.read_csv("data/people.csv")
print(df.head())
print(df.shape)          # (rows, cols)"#,
                    ),
                    CodeSample::labeled(
                        "Info & describe",
                        r"df.info()                          # columns, dtypes, non-nulls
print(df.describe(numeric_only=True))  # numeric summary",
                    ),
                ]),
            )
            .with_subsection(
                Subsection::new(
                    "selection-basics",
                    "Selection basics (columns, rows, masks)",
                    "Select a column (Series) or multiple (DataFrame). Use .loc for labels and boolean masks; .iloc for positions.",
                )
                .with_codes([
                    CodeSample::labeled(
                        "Columns & rows",
                        r#"print(df["age"].head())            # Series
print(df[["name","city"]].head())  # DataFrame
print(df.loc[0, "name"])           # first row, name
print(df.iloc[:3, :2])             # first 3 rows, first 2 cols"#,
                    ),
                    CodeSample::labeled(
                        "Filter with a mask",
                        r#"adults = df[df["age"] >= 18]
print(adults[["name","age"]])"#,
                    ),
                ]),
            )
            .with_subsection(
                Subsection::new(
                    "save-results",
                    "Save a result (to_csv)",
                    "Write filtered results to out/ without the index column.",
                )
                .with_codes([CodeSample::labeled(
                    "Write adults only",
                    r#"import pathlib
pathlib.Path("out").mkdir(exist_ok=True)
adults = df[df["age"] >= 18][["name","age","city"]]
adults.to_csv("out/adults.csv", index=False, encoding="utf-8")"#,
                )]),
            )
            .with_subsection(
                Subsection::new(
                    "copies-chained",
                    "Copies vs chained assignment",
                    "Some selections return views; modifying them can show a SettingWithCopyWarning. Prefer making a copy, then assign with .loc.",
                )
                .with_codes([
                    CodeSample::labeled(
                        "Safe pattern",
                        r#"kids = df[df["age"] < 18].copy()  # explicit copy
kids.loc[:, "is_minor"] = True
print(kids.head())"#,
                    ),
                    CodeSample::labeled(
                        "Avoid this",
                        r#"# df[df["age"] < 18]["is_minor"] = True
# ^ may or may not update the original df. Use .copy() + .loc."#,
                    ),
                ]),
            )
            .with_subsection(
                Subsection::new(
                    "troubleshooting",
                    "Troubleshooting",
                    "Common fixes for first-day issues.",
                )
                .with_codes([
                    CodeSample::labeled(
                        "ModuleNotFoundError",
                        r"python -m pip show pandas   # verify installed in THIS venv
# In Jupyter: restart the kernel after installing.",
                    ),
                    CodeSample::labeled(
                        "File not found",
                        r"import os; print(os.getcwd())   # check working directory
# ensure data/people.csv exists relative to cwd",
                    ),
                    CodeSample::labeled(
                        "Encoding / index",
                        r#"df.to_csv("out/file.csv", index=False, encoding="utf-8")"#,
                    ),
                ]),
            )
            .with_practice(
                PracticeItem::new(
                    "p1-read-peek",
                    "Read & peek",
                    "Load data/people.csv and print head(), shape, and info().",
                )
                .with_solution(
                    r#"import pandas as pd
df = pd.read_csv("data/people.csv")
print(df.head()); print(df.shape); df.info()"#,
                ),
            )
            .with_practice(
                PracticeItem::new(
                    "p1-filter-save",
                    "Filter & save (adults)",
                    "Filter rows with age ≥ 18 and save name,age,city to out/adults.csv (no index).",
                )
                .with_solution(
                    r#"adults = df[df["age"] >= 18][["name","age","city"]]
adults.to_csv("out/adults.csv", index=False)"#,
                ),
            )
            .with_practice(
                PracticeItem::new(
                    "p1-series-mean",
                    "Average age",
                    "Select the age column as a Series and print the mean.",
                )
                .with_solution(r#"ages = df["age"]; print(float(ages.mean()))"#),
            )
            .with_practice(
                PracticeItem::new(
                    "p1-copy-assign",
                    "Copy + assign safely",
                    "Create df_minors as a copy of rows with age < 18 and add is_minor=True using .loc.",
                )
                .with_solution(
                    r#"df_minors = df[df["age"] < 18].copy()
df_minors.loc[:, "is_minor"] = True
print(df_minors.head())"#,
                ),
            )
            .with_practice(
                PracticeItem::new(
                    "p1-jupyter",
                    "Try Jupyter (optional)",
                    "Launch JupyterLab, create a new notebook, import pandas, and show df.head().",
                )
                .with_solution(
                    r#"import pandas as pd
df = pd.read_csv("data/people.csv")
df.head()"#,
                ),
            ),
    ]
}
