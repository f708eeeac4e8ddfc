use course_core::model::{CodeSample, Lesson, PracticeItem, StartHere, Subsection};

pub(crate) fn lessons() -> Vec<Lesson> {
    vec![
        Lesson::new("file-io-pathlib", "Section 11 — File I/O & Pathlib")
            .with_summary(
                "Read/write text, CSV, JSON; context managers (with) and modern paths (pathlib).",
            )
            .with_duration(65)
            .with_content(
                "Work with files confidently: open safely with with-statements, handle encodings, use pathlib for paths, and read/write CSV & JSON like a pro.",
            )
            .with_start_here(
                StartHere::new([
                    "Open files correctly with context managers and understand modes (r/w/a).",
                    "Use pathlib for portable paths, listings, and simple reads/writes.",
                    "Read/write text files line-by-line and all-at-once (UTF-8).",
                    "Parse and write CSV with csv.reader / DictReader and DictWriter.",
                    "Load and dump JSON with pretty printing and Unicode preserved.",
                ])
                .with_prerequisites([
                    "Section 6 — Strings & Text Basics",
                    "Section 7 — Collections I",
                    "Section 8 — Collections II",
                ])
                .with_resource(
                    "Reading and Writing Files",
                    "https://docs.python.org/3/tutorial/inputoutput.html#reading-and-writing-files",
                )
                .with_resource(
                    "pathlib — object-oriented filesystem paths",
                    "https://docs.python.org/3/library/pathlib.html",
                )
                .with_resource(
                    "csv — CSV File Reading and Writing",
                    "https://docs.python.org/3/library/csv.html",
                )
                .with_resource(
                    "json — JSON encoder and decoder",
                    "https://docs.python.org/3/library/json.html",
                )
                .with_tip(
                    r#"Default to UTF-8: open(..., encoding="utf-8"). For CSV, also pass newline=""."#,
                ),
            )
            .with_subsection(
                Subsection::new(
                    "files-with",
                    "Files 101: modes & with-statement",
                    r#"Always open files using a **context manager** so they close automatically. Common modes:
• `"r"`: read (default), error if missing  
• `"w"`: write (truncate/create)  
• `"a"`: append (create if missing)  
• `"x"`: create new, error if exists  
Add `"b"` for binary, `"t"` for text (default). Always set `encoding="utf-8"` for text."#,
                )
                .with_codes([
                    CodeSample::labeled(
                        "Read all / lines / iterate",
                        r#"# Read whole file
with open("poem.txt", "r", encoding="utf-8") as f:
    data = f.read()

# Read lines into list
with open("poem.txt", "r", encoding="utf-8") as f:
    lines = f.readlines()

# Iterate lines (memory-friendly)
with open("poem.txt", "r", encoding="utf-8") as f:
    for line in f:
        print(line.rstrip())"#,
                    ),
                    CodeSample::labeled(
                        "Write & append (text)",
                        r#"# Overwrite or create
with open("out.txt", "w", encoding="utf-8") as f:
    f.write("Hello\n")
    f.write("World\n")

# Append
with open("out.txt", "a", encoding="utf-8") as f:
    f.write("Again!\n")"#,
                    ),
                    CodeSample::labeled(
                        "Binary (images, bytes)",
                        r#"# Copy file as bytes
with open("pic.jpg", "rb") as src, open("copy.jpg", "wb") as dst:
    dst.write(src.read())"#,
                    ),
                ]),
            )
            .with_subsection(
                Subsection::new(
                    "pathlib-basics",
                    "pathlib: modern, portable paths",
                    r"Use `pathlib.Path` for OS-independent paths. Join with `/`. Inspect with `.exists()`, `.is_file()`, `.stat()`.  
Create folders with `.mkdir(parents=True, exist_ok=True)`. List files with `.iterdir()`, `.glob()`, `.rglob()`.  
For simple text, `.read_text()` / `.write_text()` are handy (UTF-8 by default).",
                )
                .with_codes([
                    CodeSample::labeled(
                        "Join & inspect",
                        r#"from pathlib import Path

base = Path("data")
report = base / "reports" / "2025" / "jan.txt"
print(report)                 # data/reports/2025/jan.txt
print(report.parent.exists()) # directory exists?
print(report.suffix)          # .txt"#,
                    ),
                    CodeSample::labeled(
                        "Make dirs & list",
                        r#"imgs = Path("images")
imgs.mkdir(parents=True, exist_ok=True)

for p in imgs.glob("*.png"):
    print(p.name)

for p in Path(".").rglob("*.py"):
    print(p)    # recursive"#,
                    ),
                    CodeSample::labeled(
                        "Quick read/write",
                        r#"p = Path("hello.txt")
p.write_text("Namaste\n", encoding="utf-8")
print(p.read_text(encoding="utf-8"))"#,
                    ),
                ]),
            )
            .with_subsection(
                Subsection::new(
                    "text-patterns",
                    "Text file patterns",
                    "Typical tasks: count lines, filter to another file, write lists as lines. Python normalizes newlines for you in text mode.",
                )
                .with_codes([
                    CodeSample::labeled(
                        "Count lines & chars",
                        r#"from pathlib import Path
p = Path("poem.txt")
text = p.read_text(encoding="utf-8")
print("lines:", text.count("\n") + (1 if text and not text.endswith("\n") else 0))
print("chars:", len(text))"#,
                    ),
                    CodeSample::labeled(
                        "Filter lines (contains)",
                        r#"with open("input.log","r",encoding="utf-8") as fin, open("errors.log","w",encoding="utf-8") as fout:
    for line in fin:
        if "ERROR" in line:
            fout.write(line)"#,
                    ),
                    CodeSample::labeled(
                        "Write list as lines",
                        r#"lines = ["alpha","beta","gamma"]
with open("greek.txt","w",encoding="utf-8") as f:
    f.write("\n".join(lines) + "\n")"#,
                    ),
                ]),
            )
            .with_subsection(
                Subsection::new(
                    "csv-io",
                    "CSV: reader / DictReader and DictWriter",
                    r#"Open CSV with `newline=""` and an explicit encoding. Use `csv.reader` (lists) or `csv.DictReader` (dicts). For writing, use `csv.writer` or `csv.DictWriter`."#,
                )
                .with_codes([
                    CodeSample::labeled(
                        "Read rows (lists)",
                        r#"import csv
with open("people.csv","r",encoding="utf-8",newline="") as f:
    reader = csv.reader(f)
    for row in reader:
        print(row)   # ['name','age'] ..."#,
                    ),
                    CodeSample::labeled(
                        "Read as dicts",
                        r#"import csv
with open("people.csv","r",encoding="utf-8",newline="") as f:
    dr = csv.DictReader(f)  # uses header row
    ages = [int(r["age"]) for r in dr]
print(sum(ages)/len(ages))"#,
                    ),
                    CodeSample::labeled(
                        "Write dicts",
                        r#"import csv
rows = [{"name":"Asha","age":12},{"name":"Raj","age":11}]
with open("out.csv","w",encoding="utf-8",newline="") as f:
    dw = csv.DictWriter(f, fieldnames=["name","age"])
    dw.writeheader()
    dw.writerows(rows)"#,
                    ),
                ]),
            )
            .with_subsection(
                Subsection::new(
                    "json-io",
                    "JSON: load & dump (pretty, Unicode)",
                    "Use `json.load` and `json.dump` for files; `json.dumps` / `loads` for strings. Pretty print with `indent=2`. Keep Unicode readable with `ensure_ascii=False`.",
                )
                .with_codes([
                    CodeSample::labeled(
                        "Load / dump file",
                        r#"import json
# load
with open("config.json","r",encoding="utf-8") as f:
    cfg = json.load(f)

# modify
cfg["debug"] = True

# dump pretty (Unicode)
with open("config.json","w",encoding="utf-8") as f:
    json.dump(cfg, f, indent=2, ensure_ascii=False)"#,
                    ),
                    CodeSample::labeled(
                        "String <-> JSON",
                        r#"import json
s = '{"name":"Mía","age":12}'
obj = json.loads(s)
print(obj["name"])

txt = json.dumps(obj, indent=2, ensure_ascii=False)
print(txt)"#,
                    ),
                ]),
            )
            .with_subsection(
                Subsection::new(
                    "errors",
                    "Common errors & robust reads",
                    "Catch file/permission/encoding issues. Offer fallbacks or helpful messages.",
                )
                .with_codes([
                    CodeSample::labeled(
                        "Try/except with hints",
                        r#"from pathlib import Path
path = Path("data.txt")
try:
    data = path.read_text(encoding="utf-8")
except FileNotFoundError:
    print("File missing:", path)
except PermissionError:
    print("No permission for:", path)
except UnicodeDecodeError:
    # try a different encoding or replace errors
    data = path.read_text(encoding="utf-8", errors="replace")
    print("Warning: replaced undecodable characters")
else:
    print("OK, length:", len(data))"#,
                    ),
                ]),
            )
            .with_practice(
                PracticeItem::new(
                    "s11-count-lines",
                    "Count lines & words",
                    "Read poem.txt and print lines and total words (split on whitespace).",
                )
                .with_solution(
                    r#"from pathlib import Path
text = Path("poem.txt").read_text(encoding="utf-8")
lines = text.splitlines()
words = text.split()
print("lines:", len(lines), "words:", len(words))"#,
                ),
            )
            .with_practice(
                PracticeItem::new(
                    "s11-csv-avg",
                    "Average from CSV",
                    "Given scores.csv with header name,score, compute the average score.",
                )
                .with_solution(
                    r#"import csv
with open("scores.csv","r",encoding="utf-8",newline="") as f:
    dr = csv.DictReader(f)
    vals = [float(r["score"]) for r in dr]
print(sum(vals)/len(vals) if vals else 0.0)"#,
                ),
            )
            .with_practice(
                PracticeItem::new(
                    "s11-json-merge",
                    "Merge JSON configs",
                    "Load base.json and local.json, merge (local overrides), write merged.json pretty with Unicode.",
                )
                .with_solution(
                    r#"import json
with open("base.json","r",encoding="utf-8") as f: base = json.load(f)
with open("local.json","r",encoding="utf-8") as f: local = json.load(f)
merged = {**base, **local}
with open("merged.json","w",encoding="utf-8") as f:
    json.dump(merged, f, indent=2, ensure_ascii=False)"#,
                ),
            )
            .with_practice(
                PracticeItem::new(
                    "s11-list-py",
                    "List .py files (recursive) with sizes",
                    "Walk current folder recursively and print each .py path and size in bytes (use pathlib).",
                )
                .with_solution(
                    r#"from pathlib import Path
for p in Path(".").rglob("*.py"):
    print(f"{p} - {p.stat().st_size} bytes")"#,
                ),
            )
            .with_practice(
                PracticeItem::new(
                    "s11-project-skeleton",
                    "Create project skeleton",
                    "Using pathlib, create folders data/, logs/, and an empty README.md at the root.",
                )
                .with_solution(
                    r##"from pathlib import Path
Path("data").mkdir(exist_ok=True)
Path("logs").mkdir(exist_ok=True)
Path("README.md").write_text("# Project\n", encoding="utf-8")"##,
                ),
            ),
    ]
}
