use course_core::model::{CodeSample, Lesson, PracticeItem, StartHere, Subsection};

pub(crate) fn lessons() -> Vec<Lesson> {
    vec![
        Lesson::new("intro-setup", "Section 1 — Introduction & Setup")
            .with_summary("Why Python, install steps, IDE setup, and your first program.")
            .with_duration(60)
            .with_content(
                "Start here. Work through each subsection in order. Use the table of contents to jump around.",
            )
            .with_start_here(
                StartHere::new([
                    "Understand what Python is and why it’s popular.",
                    "Install Python 3 and verify your setup.",
                    "Pick an editor (VS Code / PyCharm / Jupyter).",
                    "Write & run `Hello, World!`",
                ])
                .with_prerequisites([
                    "Windows / macOS / Linux device",
                    "Admin rights to install software",
                    "~60 minutes of focused time",
                ])
                .with_resource("Python Downloads", "https://www.python.org/downloads/")
                .with_resource(
                    "VS Code + Python Extension",
                    "https://code.visualstudio.com/docs/python/python-tutorial",
                )
                .with_resource("PyCharm (Community)", "https://www.jetbrains.com/pycharm/download/")
                .with_resource("JupyterLab Install", "https://jupyter.org/install")
                .with_tip(
                    "If `python` is not found, try `python3`. On Windows, `py -V` shows the launcher version.",
                ),
            )
            .with_subsection(Subsection::new(
                "why-python",
                "What is Python? Why Learn It?",
                r"Python is a high-level, interpreted language known for readability and a massive library ecosystem (PyPI).
Common uses: automation/SRE, data analysis, web & APIs, scripting, AI/ML, and education.

Why it’s great for beginners
• Clean syntax → focus on concepts, not boilerplate
• Huge community & libraries
• Cross-platform (Windows/macOS/Linux)

Mini-exercise
1) Visit `python.org/about` and skim real-world uses.
2) Write down 3 things you’d like to build with Python.",
            ))
            .with_subsection(
                Subsection::new(
                    "install-python",
                    "Install Python (Windows/Mac/Linux)",
                    r"Pick your OS and run the commands below. Then verify the installation.

Notes
• If python not found, try python3.
• Ensure pip works: pip --version (or pip3 --version).",
                )
                .with_codes([
                    CodeSample::labeled(
                        "Windows (winget)",
                        r"winget install -e --id Python.Python.3.12
py -V
python --version",
                    ),
                    CodeSample::labeled(
                        "macOS (Homebrew)",
                        r"brew install python
python3 --version
pip3 --version",
                    ),
                    CodeSample::labeled(
                        "Linux (Debian/Ubuntu)",
                        r"sudo apt update && sudo apt install -y python3 python3-pip
python3 --version",
                    ),
                ]),
            )
            .with_subsection(Subsection::new(
                "set-up-ide",
                "Set up an IDE (VS Code / PyCharm / Jupyter)",
                r#"VS Code
1) Install VS Code + "Python" extension (Microsoft).
2) `Ctrl+Shift+P` → "Python: Select Interpreter" → choose Python 3.x.
3) Create `hello.py` and click ▶ "Run Python File".

PyCharm (Community)
1) New Project → select Python 3.x interpreter.
2) Right-click `hello.py` → Run.

Jupyter (great for notes/experiments)
1) `pip install jupyterlab`
2) `jupyter lab` → New Notebook → Python 3 → run cells with `Shift+Enter`.

Tip: pick ONE tool to start; explore others later."#,
            ))
            .with_practice(
                PracticeItem::new(
                    "s1-check-python",
                    "Check your Python",
                    "Open a terminal and print your Python version. Then try the Python REPL and exit it.",
                )
                .with_hint(
                    "Use `python --version` or `python3 --version`. In the REPL, type `exit()` or press Ctrl+Z(Win)/Ctrl+D(macOS/Linux).",
                )
                .with_solution(
                    r#"python --version
python3 --version
python
print("Hello from REPL")
exit()"#,
                ),
            )
            .with_practice(
                PracticeItem::new(
                    "s1-hello-name",
                    "Say hello with your name",
                    "Create a script that asks for your name and prints a greeting.",
                )
                .with_starter_code(
                    r#"# hello_name.py
name = input("Your name: ")
# print a friendly message"#,
                )
                .with_solution(
                    r#"name = input("Your name: ")
print(f"Nice to meet you, {name}!")"#,
                ),
            )
            .with_practice(
                PracticeItem::new(
                    "s1-jupyter",
                    "Try Jupyter (optional)",
                    "Install JupyterLab, create a new notebook, and run a cell that says Hello.",
                )
                .with_hint("Install with `pip install jupyterlab`, then run `jupyter lab`.")
                .with_solution(
                    r#"# In a notebook cell
print("Hello from Jupyter!")"#,
                ),
            ),
    ]
}
