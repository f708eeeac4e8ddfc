use course_core::model::{CodeSample, Lesson, PracticeItem, StartHere, Subsection};

pub(crate) fn lessons() -> Vec<Lesson> {
    vec![
        Lesson::new("strings-text-basics", "Section 6 — Strings & Text Basics")
            .with_summary(
                "Slicing/indexing, useful methods, split/join, f-strings, and basic formatting & escapes.",
            )
            .with_duration(55)
            .with_content(
                "Master everyday text skills: grab parts of a string, clean and search text, build readable outputs with f-strings, and handle escapes/formatting.",
            )
            .with_start_here(
                StartHere::new([
                    "Index and slice strings (start/stop/step, negative indexes, reverse).",
                    "Use common methods: strip/replace/lower/title/find, startswith/endswith.",
                    "Split text into pieces and join it back together cleanly.",
                    "Format values with f-strings (width, alignment, decimals, thousands).",
                    r"Know escapes (\n, \t) and raw strings; escape braces in templates.",
                ])
                .with_prerequisites([
                    "Section 2 — Python Syntax Essentials",
                    "Section 3 — Variables & Types",
                    "Section 4 — Operators & Expressions",
                ])
                .with_resource(
                    "str type (docs)",
                    "https://docs.python.org/3/library/stdtypes.html#text-sequence-type-str",
                )
                .with_resource(
                    "Format Specification Mini-Language",
                    "https://docs.python.org/3/library/string.html#format-specification-mini-language",
                )
                .with_tip(
                    "Strings are immutable. Methods like .strip() return new strings—remember to capture the result.",
                ),
            )
            .with_subsection(
                Subsection::new(
                    "slicing",
                    "Indexing & Slicing",
                    "Strings are sequences of characters. Indexing starts at 0. Slicing uses `s[start:stop:step]`. The `stop` is **excluded**. You can use negative indexes and even a negative step to reverse.",
                )
                .with_codes([
                    CodeSample::labeled(
                        "Index & length",
                        r#"s = "Python"
print(s[0], s[1], s[-1])   # P y n
print(len(s))              # 6"#,
                    ),
                    CodeSample::labeled(
                        "Basic slices",
                        r#"s = "strawberry"
print(s[0:5])     # straw   (0..4)
print(s[:5])      # straw   (start default 0)
print(s[5:])      # berry   (till end)
print(s[-5:])     # berry   (last 5)"#,
                    ),
                    CodeSample::labeled(
                        "Step & reverse",
                        r#"t = "0123456789"
print(t[::2])     # 02468   (step=2)
print(t[1::2])    # 13579
print(t[::-1])    # 9876543210  (reverse)"#,
                    ),
                    CodeSample::labeled(
                        "Safe slicing vs IndexError",
                        r#"s = "cat"
# print(s[99])    # IndexError
print(s[2:99])    # 't' (slices are safe even if stop > len)"#,
                    ),
                ]),
            )
            .with_subsection(
                Subsection::new(
                    "methods",
                    "Everyday Methods (clean, search, change case)",
                    "Most string tasks are a method away. Remember: they return **new** strings.",
                )
                .with_codes([
                    CodeSample::labeled(
                        "Trim & case",
                        r#"name = "  dhruv  "
print(name.strip())       # 'dhruv'
print(name.strip().title()) # 'Dhruv'
print("MIXed".lower())    # 'mixed'
print("nice".upper())     # 'NICE'"#,
                    ),
                    CodeSample::labeled(
                        "Search & check",
                        r#"s = "banana"
print(s.find("na"))       # 2  (or -1 if not found)
print(s.rfind("na"))      # 4
print(s.startswith("ba")) # True
print(s.endswith("na"))   # True
print(s.count("a"))       # 3"#,
                    ),
                    CodeSample::labeled(
                        "Replace (all)",
                        r#"msg = "2025-09-04"
print(msg.replace("-", "/"))  # 2025/09/04"#,
                    ),
                    CodeSample::labeled(
                        "is* checks",
                        r#""123".isdigit()     # True
"3.14".isdigit()    # False (dot not a digit)
"abc".isalpha()     # True
"abc123".isalnum()  # True
" \t\n".isspace()  # True"#,
                    ),
                ]),
            )
            .with_subsection(
                Subsection::new(
                    "split-join",
                    "Split & Join",
                    "Use `split()` to break text into a list (by spaces or a separator). Use `join()` to glue pieces back with a chosen separator.",
                )
                .with_codes([
                    CodeSample::labeled(
                        "Split on whitespace",
                        r#"line = "alpha   beta   gamma"
parts = line.split()  # ['alpha','beta','gamma']
print(parts)"#,
                    ),
                    CodeSample::labeled(
                        "Split on commas",
                        r#"row = "a,b,c,,d"
print(row.split(","))        # ['a','b','c','','d']
print(row.split(",", maxsplit=2))  # ['a','b','c,,d']"#,
                    ),
                    CodeSample::labeled(
                        "Join pieces",
                        r#"words = ["fast","clean","Python"]
print(" ".join(words))     # 'fast clean Python'
print("-".join(words))     # 'fast-clean-Python'"#,
                    ),
                    CodeSample::labeled(
                        "CSV-ish cleanup",
                        r#"raw = "  red , blue , green  "
colors = [c.strip() for c in raw.split(",")]
print(colors)  # ['red','blue','green']"#,
                    ),
                ]),
            )
            .with_subsection(
                Subsection::new(
                    "fstrings",
                    "f-Strings (modern formatting)",
                    "f-strings are the clearest way to format values. Use `{expr:spec}` for width, alignment, decimals, commas, percentages, and more. Python 3.8+ also supports the **debug** form `{name=}`.",
                )
                .with_codes([
                    CodeSample::labeled(
                        "Basics",
                        r#"name = "Asha"; score = 94.258
print(f"Hi {name}, score={score}")     # Hi Asha, score=94.258
print(f"{score:.2f}")                  # 94.26 (2 decimals)
x = 42
print(f"{x=}")                         # x=42 (debug form)"#,
                    ),
                    CodeSample::labeled(
                        "Width, alignment, fill",
                        r#"item = "Pad"
print(f"[{item:<6}]")   # [Pad   ] left align width=6
print(f"[{item:>6}]")   # [   Pad] right align
print(f"[{item:^6}]")   # [ Pad ] center
print(f"[{item:.^6}]")  # [..Pad.] fill with '.'"#,
                    ),
                    CodeSample::labeled(
                        "Numbers (commas, %)",
                        r#"n = 1234567
print(f"{n:,}")          # 1,234,567
ratio = 0.8732
print(f"{ratio:.1%}")    # 87.3%"#,
                    ),
                    CodeSample::labeled(
                        "Dates & expressions",
                        r#"from datetime import date
today = date(2025, 9, 4)
print(f"Today is {today:%b %d, %Y}")  # Sep 04, 2025
a, b = 5, 7
print(f"{a} + {b} = {a + b}")"#,
                    ),
                ]),
            )
            .with_subsection(
                Subsection::new(
                    "formatting-escapes",
                    "Basic .format(), Escapes & Raw Strings",
                    r#"`str.format()` is an older (still useful) alternative to f-strings—handy for templates.  
Escape sequences: `\n` newline, `\t` tab, `\'`/\`"` quotes. **Raw strings** (prefix `r`) don’t treat backslashes as escapes (great for regex and Windows paths). Escape braces in templates with `{{` and `}}`."#,
                )
                .with_codes([
                    CodeSample::labeled(
                        "str.format()",
                        r#""Hello, {0}! You have {1} new messages.".format("Mia", 3)
"X={x}, Y={y}".format(x=10, y=20)
"{:>8}".format("pad")   # right align width=8"#,
                    ),
                    CodeSample::labeled(
                        "Escapes & raw strings",
                        r#"print("Line1\nLine2")     # newline
print("Tab\tSeparated")  # tab
print(r"C:\Users\Dhruv") # raw, shows backslashes"#,
                    ),
                    CodeSample::labeled(
                        "Escape braces",
                        r#""{{ total }} items: {}".format(3)   # '{ total } items: 3'"#,
                    ),
                    CodeSample::labeled(
                        "Multiline strings",
                        r#"msg = """Dear user,
Thanks for joining.
- Team"""
print(msg)"#,
                    ),
                ]),
            )
            .with_practice(
                PracticeItem::new(
                    "s6-last-three",
                    "Last 3 characters",
                    "Read a word and print its last 3 characters (or the whole word if shorter).",
                )
                .with_solution(
                    r#"w = input("Word: ")
print(w[-3:] if len(w) >= 3 else w)"#,
                ),
            )
            .with_practice(
                PracticeItem::new(
                    "s6-email-username",
                    "Email → username",
                    r#"Given an email like "name@example.com", print the part before "@". Use slicing with .find()."#,
                )
                .with_solution(
                    r#"e = input("Email: ")
at = e.find("@")
print(e[:at] if at != -1 else e)"#,
                ),
            )
            .with_practice(
                PracticeItem::new(
                    "s6-clean-colors",
                    "Clean color list",
                    r#"Input: " red , blue , green ". Print a list ['red', 'blue', 'green'] (no spaces)."#,
                )
                .with_solution(
                    r#"raw = input("Colors: ")
colors = [c.strip() for c in raw.split(",")]
print(colors)"#,
                ),
            )
            .with_practice(
                PracticeItem::new(
                    "s6-receipt",
                    "Receipt line",
                    r#"Format item, qty, price so it looks like: "Apple .... x2 .... ₹39.98" (price with 2 decimals)."#,
                )
                .with_starter_code(
                    r#"item = "Apple"; qty = 2; price = 19.99
total = qty * price"#,
                )
                .with_solution(
                    r#"item = "Apple"; qty = 2; price = 19.99
total = qty * price
print(f"{item:.<12} x{qty:<2} ₹{total:,.2f}")"#,
                ),
            )
            .with_practice(
                PracticeItem::new(
                    "s6-title-name",
                    "Title case name",
                    r#"Ask for first and last name with extra spaces; print "First Last" properly capitalized."#,
                )
                .with_solution(
                    r#"first = input("First: ").strip().title()
last  = input("Last: ").strip().title()
print(f"{first} {last}")"#,
                ),
            ),
    ]
}
