use course_core::model::{CodeSample, Lesson, PracticeItem, StartHere, Subsection};

pub(crate) fn lessons() -> Vec<Lesson> {
    vec![
        Lesson::new("variables-and-types", "Section 3 — Variables & Types")
            .with_summary("Numbers, strings, booleans, None, and type casting (conversions).")
            .with_duration(45)
            .with_content(
                "Learn how Python stores data in variables, what the basic data types are, and how to convert safely between them.",
            )
            .with_start_here(
                StartHere::new([
                    "Use clear variable names and understand dynamic typing.",
                    "Work with numbers (int/float), strings, booleans, and None.",
                    "Know truthiness and the difference between == and is.",
                    "Convert safely with int()/float()/str()/bool().",
                ])
                .with_prerequisites(["Section 2 — Python Syntax Essentials"])
                .with_resource(
                    "Built-in Types (docs)",
                    "https://docs.python.org/3/library/stdtypes.html",
                )
                .with_resource(
                    "Numbers (docs)",
                    "https://docs.python.org/3/library/stdtypes.html#numeric-types-int-float-complex",
                )
                .with_resource(
                    "Text Sequence Type — str",
                    "https://docs.python.org/3/library/stdtypes.html#text-sequence-type-str",
                )
                .with_tip(
                    "Use short, lower_snake_case names. Reserve UPPER_CASE for constants (e.g., TAX_RATE = 0.18).",
                ),
            )
            .with_subsection(
                Subsection::new(
                    "variables-basics",
                    "Variables: names, assignment, dynamic typing",
                    r"A **variable** is a name that points to a value in memory.
Python is **dynamically typed**: the type is tied to the value, not the name.
Use lower_snake_case names; keep them descriptive but short.

Facts
• Reassignment moves the name to a new value.
• Multiple assignment and swapping are built in.
• Augmented assignment (+=, -=, etc.) updates in place for some types.",
                )
                .with_codes([
                    CodeSample::labeled(
                        "Assignment & naming",
                        r#"age = 12
name = "Anaya"
pi_approx = 3.14

# invalid names: 2cats, my-name, class (keyword)
# good names: total, first_name, is_admin"#,
                    ),
                    CodeSample::labeled(
                        "Multiple assignment & swap",
                        r"x, y = 10, 20
x, y = y, x         # swap without a temp variable
total = 0
total += 5          # 5
total *= 2          # 10",
                    ),
                    CodeSample::labeled(
                        "What type is it?",
                        r#"print(type(42))        # <class 'int'>
print(type(3.5))      # <class 'float'>
print(type("hi"))     # <class 'str'>"#,
                    ),
                ]),
            )
            .with_subsection(
                Subsection::new(
                    "numbers",
                    "Numbers: int and float",
                    r"Python has **int** (no size limit) and **float** (double precision).
Use / for true division, // for floor division, % for remainder, ** for power.

Floating-point is approximate; for money, consider decimal.Decimal.",
                )
                .with_codes([
                    CodeSample::labeled(
                        "Arithmetic",
                        r"a = 7; b = 3
print(a + b, a - b, a * b)  # 10 4 21
print(a / b)   # 2.3333333333333335 (float)
print(a // b)  # 2  (floor division)
print(a % b)   # 1
print(2 ** 10) # 1024",
                    ),
                    CodeSample::labeled(
                        "Rounding & precision",
                        r#"print(round(2.675, 2))   # 2.67 (binary float quirk)

from decimal import Decimal, ROUND_HALF_UP
price = Decimal("2.675").quantize(Decimal("0.01"), rounding=ROUND_HALF_UP)
print(price)  # 2.68  (exact, for currency)"#,
                    ),
                ]),
            )
            .with_subsection(
                Subsection::new(
                    "strings",
                    "Strings: text data",
                    r"Strings are **immutable** sequences of characters.
Use single or double quotes; triple quotes for multi-line.
Indexing starts at 0. Slicing uses start:stop (stop excluded).",
                )
                .with_codes([
                    CodeSample::labeled(
                        "Basics & slicing",
                        r#"s = "Python"
print(s[0], s[-1])   # P n
print(s[1:4])        # yth
print(len(s))        # 6
print("thon" in s)   # True"#,
                    ),
                    CodeSample::labeled(
                        "Methods & f-strings",
                        r#"name = "  dhruv  "
print(name.strip().title())  # Dhruv
print("a,b,c".split(","))    # ['a', 'b', 'c']
print("-".join(["a","b","c"]))  # a-b-c

score = 94.258
print(f"Score: {score:.1f}")    # Score: 94.3"#,
                    ),
                ]),
            )
            .with_subsection(
                Subsection::new(
                    "booleans-none",
                    "Booleans & None",
                    r"**Booleans** are True/False results from comparisons and logic.
**None** means “no value” or “not set yet”.

Truthiness: values considered False → 0, 0.0, '', [], {}, set(), None.
Everything else is True.",
                )
                .with_codes([
                    CodeSample::labeled(
                        "Comparisons & logic",
                        r"x = 10
print(x >= 5)           # True
print(5 < x < 12)       # True (chained)
print(True and False)   # False
print(True or False)    # True
print(not True)         # False",
                    ),
                    CodeSample::labeled(
                        "None & identity",
                        r#"mystery = None
print(mystery is None)  # True  (use "is" for None)
print(mystery == None)  # True, but prefer "is"

# Truthiness:
print(bool(0), bool(""), bool([]), bool(None))  # False False False False
print(bool("0"), bool([0]))  # True True"#,
                    ),
                ]),
            )
            .with_subsection(
                Subsection::new(
                    "casting",
                    "Type casting (conversions)",
                    r#"Convert between types with built-ins.
Be careful: `int("3.7")` fails; convert to float first. `bool("False")` is True (any non-empty string is True)."#,
                )
                .with_codes([
                    CodeSample::labeled(
                        "Common conversions",
                        r#"int("42")       # 42
float("3.14")   # 3.14
str(123)        # '123'
bool(0)         # False
bool("")        # False
bool("False")   # True  (non-empty string)"#,
                    ),
                    CodeSample::labeled(
                        "Safe number input",
                        r#"while True:
    txt = input("Enter an integer: ")
    try:
        n = int(txt)
        break
    except ValueError:
        print("Please type digits only!")

print("You typed", n)"#,
                    ),
                ]),
            )
            .with_practice(
                PracticeItem::new(
                    "s3-swap",
                    "Swap two numbers",
                    "Ask for two integers and print them swapped (no temp variable).",
                )
                .with_starter_code(
                    r#"a = int(input("A: "))
b = int(input("B: "))
# swap here"#,
                )
                .with_hint("Use tuple unpacking: a, b = b, a")
                .with_solution(
                    r#"a = int(input("A: "))
b = int(input("B: "))
a, b = b, a
print("A =", a, "B =", b)"#,
                ),
            )
            .with_practice(
                PracticeItem::new(
                    "s3-c-to-f",
                    "Celsius → Fahrenheit",
                    "Ask for temperature in °C (can be a decimal) and print °F to 1 decimal place.",
                )
                .with_starter_code(
                    r#"c = float(input("°C: "))
# F = C * 9/5 + 32"#,
                )
                .with_solution(
                    r#"c = float(input("°C: "))
f = c * 9/5 + 32
print(f"{f:.1f} °F")"#,
                ),
            )
            .with_practice(
                PracticeItem::new(
                    "s3-name-clean",
                    "Name cleaner",
                    r#"Ask for first and last name with extra spaces, then print a neat "First Last"."#,
                )
                .with_solution(
                    r#"first = input("First: ").strip().title()
last  = input("Last: ").strip().title()
print(f"{first} {last}")"#,
                ),
            )
            .with_practice(
                PracticeItem::new(
                    "s3-price-parse",
                    "Parse a price string",
                    r#"Given text like "₹1,299.50" or "$1,299.50", remove symbols/commas and convert to float."#,
                )
                .with_starter_code(
                    r#"raw = input("Price (e.g. ₹1,299.50): ")
# keep digits and dot"#,
                )
                .with_hint(
                    r#"Replace "," and strip currency symbols using .replace() and .strip() or a simple loop."#,
                )
                .with_solution(
                    r#"raw = input("Price: ")
clean = raw.replace(",", "").strip("₹$€£ ")
value = float(clean)
print(value)"#,
                ),
            )
            .with_practice(
                PracticeItem::new(
                    "s3-truthy",
                    "Truthy or Falsey?",
                    r#"Write a script that prints True/False for each of these: 0, 1, "", "0", [], [0], None."#,
                )
                .with_solution(
                    r#"items = [0, 1, "", "0", [], [0], None]
for x in items:
    print(x, "=>", bool(x))"#,
                ),
            ),
    ]
}
