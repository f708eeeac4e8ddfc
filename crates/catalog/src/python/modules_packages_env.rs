use course_core::model::{CodeSample, Lesson, PracticeItem, StartHere, Subsection};

pub(crate) fn lessons() -> Vec<Lesson> {
    vec![
        Lesson::new("modules-packages-env", "Section 10 — Modules, Packages & Environments")
            .with_summary(
                "import statements, pip installs, virtual environments (venv), and simple project layout.",
            )
            .with_duration(60)
            .with_content(
                "Organize code with modules and packages, isolate dependencies with virtual environments, and structure small projects cleanly.",
            )
            .with_start_here(
                StartHere::new([
                    "Import from the standard library and your own files/packages.",
                    "Install/manage third-party packages with pip & requirements.txt.",
                    "Create/activate a virtual environment and use pip inside it.",
                    "Understand package layout, __init__.py, and running modules with -m.",
                    r#"Use __name__ == "__main__" and avoid common import pitfalls."#,
                ])
                .with_prerequisites([
                    "Section 7 — Collections I",
                    "Section 8 — Collections II",
                    "Section 9 — Functions",
                ])
                .with_resource(
                    "The import system",
                    "https://docs.python.org/3/reference/import.html",
                )
                .with_resource(
                    "venv — Creating virtual environments",
                    "https://docs.python.org/3/library/venv.html",
                )
                .with_resource("pip User Guide", "https://pip.pypa.io/en/stable/user_guide/")
                .with_tip(
                    "Prefer `python -m pip ...` so you install to the interpreter you’re actually using (especially inside venvs).",
                ),
            )
            .with_subsection(
                Subsection::new(
                    "imports-101",
                    "Imports 101: modules, packages, aliases",
                    r"A **module** is one .py file. A **package** is a folder with `__init__.py` that contains modules (and subpackages).
Import styles:
• `import pkg.mod`  (use prefix when calling)
• `from pkg import mod`  (import a name into your namespace)
• `from pkg.mod import name as alias` (rename for clarity)
Absolute imports are preferred; use explicit relatives inside a package (`from .sub import x`).",
                )
                .with_codes([
                    CodeSample::labeled(
                        "Standard library imports",
                        r"import math
from datetime import date

print(math.sqrt(16))
print(date.today())
print(stats.mean([10, 20, 30]))",
                    ),
                    CodeSample::labeled(
                        "Your own module (same folder)",
                        r#"# file: util.py
def greet(name: str) -> str:
    return f"Hello, {name}"

# file: app.py
from util import greet as hello

print(util.greet("Asha"))
print(hello("Raj"))"#,
                    ),
                    CodeSample::labeled(
                        "__main__ guard (only run when executed)",
                        r#"# file: script.py
def run():
    print("Doing work...")

if __name__ == "__main__":
    run()  # runs only when `python script.py`"#,
                    ),
                ]),
            )
            .with_subsection(
                Subsection::new(
                    "pip-basics",
                    "pip basics & requirements.txt",
                    r"Use pip to install packages from PyPI. Always prefer `python -m pip` so the right interpreter is used (esp. in venvs).  
Pin dependencies in `requirements.txt`. Version rules: `==` exact, `>=` at least, `<` less than, wildcards like `==2.*`.",
                )
                .with_codes([
                    CodeSample::labeled(
                        "Install / list / show / remove",
                        r"python -m pip install requests
python -m pip list
python -m pip show requests
python -m pip uninstall requests",
                    ),
                    CodeSample::labeled(
                        "Freeze & install from file",
                        r"python -m pip freeze > requirements.txt
python -m pip install -r requirements.txt",
                    ),
                    CodeSample::labeled(
                        "Version specifiers",
                        r"# requirements.txt examples
requests==2.32.3
flask>=3.0,<4
pydantic==2.*",
                    ),
                ]),
            )
            .with_subsection(
                Subsection::new(
                    "venv",
                    "Virtual environments (venv)",
                    r"A **virtual environment** is a private folder containing its own Python and site-packages.  
Use one venv **per project** to keep dependencies isolated. Activate it before using pip/run scripts. Remember to add `.venv/` to `.gitignore`.",
                )
                .with_codes([
                    CodeSample::labeled(
                        "Windows (PowerShell)",
                        r"python -m venv .venv
..venv\Scripts\Activate.ps1
python -V
python -m pip install requests

# deactivate when done
deactivate",
                    ),
                    CodeSample::labeled(
                        "macOS / Linux",
                        r"python3 -m venv .venv
source .venv/bin/activate
python3 -V
python -m pip install requests

# deactivate when done
deactivate",
                    ),
                    CodeSample::labeled(
                        ".gitignore",
                        r".venv/
__pycache__/
*.pyc",
                    ),
                ]),
            )
            .with_subsection(
                Subsection::new(
                    "project-layout",
                    "Project layout & running with -m",
                    r"Two tiny layouts:
**Flat script** (good for one file).  
**Package layout** (scales to multiple modules). Use `python -m package` to run the package’s `__main__.py`.  
Inside packages, prefer relative imports (`from .util import x`).",
                )
                .with_codes([
                    CodeSample::labeled(
                        "Flat script",
                        r#"project/
  hello.py

# hello.py
def main():
    print("Hello!")
if __name__ == "__main__":
    main()"#,
                    ),
                    CodeSample::labeled(
                        "Package (src layout)",
                        r#"project/
  pyproject.toml        # optional (later sections)
  src/
    app/
      __init__.py
      __main__.py
      util.py

# util.py
def greet(n): return f"Hi {n}"

# __main__.py (entry point)
from .util import greet
print(greet("world"))

# run from project root:
# python -m app         (if PYTHONPATH includes src)
# or run with:
# python -m pip install -e .   (editable install, later)
"#,
                    ),
                    CodeSample::labeled(
                        "Run a module with -m",
                        r"# Run a package’s entry point
python -m app

# Run a submodule as a script
python -m app.util",
                    ),
                ]),
            )
            .with_subsection(
                Subsection::new(
                    "import-mechanics",
                    "Import mechanics, sys.path & common pitfalls",
                    r"Python searches modules on **sys.path** (current dir, installed site-packages, etc.).  
Use absolute imports from the project root, or explicit relative imports inside a package. Avoid circular imports.  
For hot-reloading in REPL, use `import importlib; importlib.reload(mod)`.",
                )
                .with_codes([
                    CodeSample::labeled(
                        "Inspect import paths",
                        r"import sys, pprint
pprint.pprint(sys.path)",
                    ),
                    CodeSample::labeled(
                        "Explicit relative import (inside package)",
                        r"# src/app/main.py
from .util import helper  # relative (same package)
# from app.util import helper  # absolute (works when app is importable)",
                    ),
                    CodeSample::labeled(
                        "Reload a module (REPL)",
                        r"import mymod
# edit mymod.py ...
importlib.reload(mymod)",
                    ),
                ]),
            )
            .with_practice(
                PracticeItem::new(
                    "s10-make-venv",
                    "Make and use a venv",
                    "Create .venv, activate it, install requests, and freeze requirements.txt.",
                )
                .with_solution(
                    r"# Windows (PowerShell)
python -m venv .venv
..venv\Scripts\Activate.ps1
python -m pip install requests
python -m pip freeze > requirements.txt

# macOS/Linux
python3 -m venv .venv
source .venv/bin/activate
python -m pip install requests
python -m pip freeze > requirements.txt",
                ),
            )
            .with_practice(
                PracticeItem::new(
                    "s10-small-package",
                    "Tiny package with __main__",
                    "Create package folder app/ with __init__.py, __main__.py, util.py. In __main__, import greet() from util and print a message. Run it with python -m app.",
                )
                .with_solution(
                    r#"# app/util.py
def greet(name: str) -> str:
    return f"Hello, {name}"

# app/__main__.py
from .util import greet
print(greet("from package"))

# run:
python -m app"#,
                ),
            )
            .with_practice(
                PracticeItem::new(
                    "s10-relative-import",
                    "Practice explicit relative import",
                    "Inside a package pkg/, create a.py and b.py. In a.py import hi() from b.py using a relative import and call it.",
                )
                .with_solution(
                    r#"# pkg/b.py
def hi():
    print("hi from b")

# pkg/a.py
from .b import hi
hi()"#,
                ),
            )
            .with_practice(
                PracticeItem::new(
                    "s10-reqs-pin",
                    "Pin versions",
                    "Write a requirements.txt that pins requests exactly and allows any Flask 3.x.",
                )
                .with_solution(
                    r"requests==2.32.3
flask==3.*",
                ),
            )
            .with_practice(
                PracticeItem::new(
                    "s10-import-guard",
                    "__main__ guard",
                    "Create a module that prints a message only when executed directly, not when imported.",
                )
                .with_solution(
                    r#"# tool.py
def run():
    print("Running tool")

if __name__ == "__main__":
    run()"#,
                ),
            ),
    ]
}
