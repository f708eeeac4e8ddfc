use course_core::model::{CodeSample, Lesson, PracticeItem, StartHere, Subsection};

pub(crate) fn lessons() -> Vec<Lesson> {
    vec![
        Lesson::new("errors-exceptions", "Section 12 — Errors & Exceptions")
            .with_summary(
                "try/except/else/finally, catching the right exceptions, raise, custom exceptions, best practices.",
            )
            .with_duration(60)
            .with_content(
                "Handle the unexpected without crashing. Learn the anatomy of try/except/else/finally, when and how to raise errors, define your own exception types, and write safe, readable error-handling code.",
            )
            .with_start_here(
                StartHere::new([
                    "Use try/except/else/finally correctly (small try blocks!).",
                    "Catch specific exceptions (ValueError, KeyError, FileNotFoundError, etc.).",
                    "Raise your own exceptions with useful messages.",
                    "Create custom exception classes and use raise from for context.",
                    "Know patterns like EAFP vs LBYL and when to use each.",
                ])
                .with_prerequisites([
                    "Section 10 — Modules, Packages & Environments",
                    "Section 11 — File I/O & Pathlib",
                ])
                .with_resource(
                    "Errors & Exceptions (tutorial)",
                    "https://docs.python.org/3/tutorial/errors.html",
                )
                .with_resource(
                    "Exceptions (reference)",
                    "https://docs.python.org/3/library/exceptions.html",
                )
                .with_resource(
                    "traceback module",
                    "https://docs.python.org/3/library/traceback.html",
                )
                .with_tip(
                    "Keep the try block minimal—only the line(s) that might fail. Put normal code outside to avoid hiding other bugs.",
                ),
            )
            .with_subsection(
                Subsection::new(
                    "anatomy",
                    "Anatomy: try / except / else / finally",
                    r"Basic shape:
• Code that might fail goes in `try`.  
• `except` handles specific error types.  
• `else` runs only if **no** exception happened.  
• `finally` always runs (cleanup).",
                )
                .with_codes([
                    CodeSample::labeled(
                        "Numbers from input",
                        r#"txt = input("Enter an integer: ")
try:
    n = int(txt)                 # might raise ValueError
except ValueError:
    print("Please type digits only.")
else:
    print("OK! You typed", n)
finally:
    print("Done asking.")"#,
                    ),
                    CodeSample::labeled(
                        "Minimal try",
                        r#"# Good: tiny try — only the risky line inside
price = input("Price: ")
try:
    value = float(price)  # risky
except ValueError:
    value = 0.0
total = value * 1.18
print(total)"#,
                    ),
                ]),
            )
            .with_subsection(
                Subsection::new(
                    "catch-specific",
                    "Catching the right exceptions",
                    r"Name the exceptions you expect—avoid bare `except:`.  
Group multiple types in a tuple. Use `as e` to read the message.  
Common built-ins: ValueError, TypeError, KeyError, IndexError, FileNotFoundError, ZeroDivisionError, PermissionError.",
                )
                .with_codes([
                    CodeSample::labeled(
                        "Specific is safer",
                        r#"data = {"count": "10"}
try:
    # KeyError if missing; ValueError if not digits
    n = int(data["count"])
except KeyError as e:
    print("Missing key:", e)
except ValueError as e:
    print("Bad number:", e)"#,
                    ),
                    CodeSample::labeled(
                        "Group a few",
                        r#"def safe_div(a, b):
    try:
        return a / b
    except (TypeError, ZeroDivisionError) as e:
        print("Cannot divide:", e)
        return None"#,
                    ),
                    CodeSample::labeled(
                        "Avoid bare except",
                        r#"try:
    risky()
except Exception as e:          # still broad, but not bare
    print("Unexpected error:", e)
    # consider logging and re-raise for real apps
    # raise"#,
                    ),
                ]),
            )
            .with_subsection(
                Subsection::new(
                    "raise-custom",
                    "raise & custom exceptions",
                    r#"Use `raise SomeError("message")` to signal problems.  
Define custom exceptions by subclassing `Exception`.  
Use `raise ... from ...` to chain exceptions (preserve original cause)."#,
                )
                .with_codes([
                    CodeSample::labeled(
                        "Raise with message",
                        r#"def percent(part: float, whole: float) -> float:
    if whole <= 0:
        raise ValueError("whole must be > 0")
    return (part / whole) * 100

print(percent(30, 50))
# print(percent(10, 0))  # ValueError"#,
                    ),
                    CodeSample::labeled(
                        "Custom exception class",
                        r#"class InsufficientFunds(Exception):
    pass

def withdraw(balance: float, amount: float) -> float:
    if amount > balance:
        raise InsufficientFunds(f"need {amount-balance:.2f} more")
    return balance - amount

try:
    withdraw(100.0, 250.0)
except InsufficientFunds as e:
    print("Withdraw failed:", e)"#,
                    ),
                    CodeSample::labeled(
                        r#"Chaining with "from""#,
                        r#"def parse_price(text: str) -> float:
    try:
        return float(text.replace(",", ""))
    except Exception as e:
        # keep original cause
        raise ValueError(f"bad price: {text!r}") from e"#,
                    ),
                ]),
            )
            .with_subsection(
                Subsection::new(
                    "else-finally-patterns",
                    "Patterns with else/finally",
                    r"`else` holds the normal path (only runs if try succeeded).  
`finally` is for cleanup (close files, release locks). Combine them for clear control flow.",
                )
                .with_codes([
                    CodeSample::labeled(
                        "File copy with reporting",
                        r#"copied = False
try:
    with open("in.txt","rb") as src, open("out.txt","wb") as dst:
        dst.write(src.read())
        copied = True
except FileNotFoundError:
    print("Input file missing.")
else:
    print("Copy OK")      # only if no exception
finally:
    print("copied =", copied)  # always"#,
                    ),
                ]),
            )
            .with_subsection(
                Subsection::new(
                    "eafp-lbyl",
                    "EAFP vs LBYL",
                    r"**EAFP** (“Easier to Ask Forgiveness than Permission”): try the operation and catch errors.  
**LBYL** (“Look Before You Leap”): check conditions first.  
Prefer EAFP when checks race or are clunky (files, parsing). Prefer LBYL for cheap, clear checks.",
                )
                .with_codes([
                    CodeSample::labeled(
                        "Parsing (EAFP)",
                        r"def parse_int(txt: str) -> int | None:
    try:
        return int(txt)
    except ValueError:
        return None",
                    ),
                    CodeSample::labeled(
                        "Indexing (LBYL)",
                        r"def get_third(items: list[int]) -> int | None:
    if len(items) >= 3:
        return items[2]
    return None",
                    ),
                ]),
            )
            .with_subsection(
                Subsection::new(
                    "traceback-logging",
                    "Seeing the error: traceback & logging",
                    r"When debugging, you may want the full stack trace.  
Use `traceback.format_exc()` to capture it as text; or the `logging` module for production logs.",
                )
                .with_codes([
                    CodeSample::labeled(
                        "Print a stack trace",
                        r#"import traceback
try:
    1 / 0
except Exception:
    print("Oops!")
    print(traceback.format_exc())"#,
                    ),
                    CodeSample::labeled(
                        "Minimal logging",
                        r#"import logging
logging.basicConfig(level=logging.INFO)
try:
    risky()
except Exception as e:
    logging.exception("Failed in risky()")  # writes traceback"#,
                    ),
                ]),
            )
            .with_subsection(
                Subsection::new(
                    "assert-vs-exc",
                    "assert vs exceptions",
                    r"`assert` is for internal sanity checks during development/tests.  
Don’t use it for user input—`python -O` can disable asserts. For real validation, raise exceptions.",
                )
                .with_codes([
                    CodeSample::labeled(
                        "Do & don’t",
                        r#"# Good (internal invariant)
def midpoint(a: int, b: int) -> float:
    assert a <= b, "a should be <= b"
    return (a + b) / 2

# Not for user input:
# assert user_age > 0  # don't do this for validation
# raise ValueError("age must be > 0")  # do this instead"#,
                    ),
                ]),
            )
            .with_practice(
                PracticeItem::new(
                    "s12-safe-int",
                    "Safe integer input",
                    "Write read_int(prompt) that keeps asking until the user enters a valid int, then returns it.",
                )
                .with_solution(
                    r#"def read_int(prompt: str = "Number: ") -> int:
    while True:
        try:
            return int(input(prompt))
        except ValueError:
            print("Please type digits only.")"#,
                ),
            )
            .with_practice(
                PracticeItem::new(
                    "s12-withdraw",
                    "Withdraw with custom exception",
                    "Create InsufficientFunds and a withdraw(balance, amount) function that raises it when needed; catch and print the message.",
                )
                .with_solution(
                    r#"class InsufficientFunds(Exception): pass
def withdraw(balance: float, amount: float) -> float:
    if amount > balance:
        raise InsufficientFunds(f"need {amount-balance:.2f} more")
    return balance - amount

try:
    print(withdraw(100, 250))
except InsufficientFunds as e:
    print("Error:", e)"#,
                ),
            )
            .with_practice(
                PracticeItem::new(
                    "s12-parse-price",
                    "Parse price with chaining",
                    r#"Implement parse_price("₹1,299.50") -> 1299.50. On failure, raise ValueError with raise from."#,
                )
                .with_solution(
                    r#"def parse_price(text: str) -> float:
    try:
        clean = text.replace(",", "").strip("₹$€£ ")
        return float(clean)
    except Exception as e:
        raise ValueError(f"bad price: {text!r}") from e"#,
                ),
            )
            .with_practice(
                PracticeItem::new(
                    "s12-file-read",
                    "Robust file read",
                    "Write read_text(path) that returns the text or None, printing friendly messages for FileNotFoundError and UnicodeDecodeError.",
                )
                .with_solution(
                    r#"def read_text(path: str):
    try:
        with open(path, "r", encoding="utf-8") as f:
            return f.read()
    except FileNotFoundError:
        print("Missing file:", path); return None
    except UnicodeDecodeError:
        print("Encoding problem in:", path); return None"#,
                ),
            )
            .with_practice(
                PracticeItem::new(
                    "s12-percent",
                    "Validate and raise",
                    "Write percent(part, whole) that raises ValueError if whole <= 0; otherwise returns (part/whole)*100.",
                )
                .with_solution(
                    r#"def percent(part: float, whole: float) -> float:
    if whole <= 0:
        raise ValueError("whole must be > 0")
    return (part / whole) * 100"#,
                ),
            ),
    ]
}
