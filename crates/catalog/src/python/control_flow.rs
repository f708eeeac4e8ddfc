use course_core::model::{CodeSample, Lesson, PracticeItem, StartHere, Subsection};

pub(crate) fn lessons() -> Vec<Lesson> {
    vec![
        Lesson::new("control-flow", "Section 5 — Control Flow")
            .with_summary(
                "if/elif/else, for/while loops, break/continue, loop-else, and useful patterns.",
            )
            .with_duration(55)
            .with_content(
                "Decide what your program should do (conditions) and how many times it should do it (loops). Then combine them with common patterns.",
            )
            .with_start_here(
                StartHere::new([
                    "Write clear decisions with if/elif/else (and guard clauses).",
                    "Loop over sequences with for, numbers with range(), and keep indexes with enumerate().",
                    "Use while for “keep going until…” problems (sentinel loops).",
                    "Control loops using break/continue and understand loop-else.",
                    "Apply patterns: accumulate, search, count, max/min, zip through lists.",
                ])
                .with_prerequisites([
                    "Section 2 — Python Syntax Essentials",
                    "Section 3 — Variables & Types",
                    "Section 4 — Operators & Expressions",
                ])
                .with_resource(
                    "Tutorial — if statements",
                    "https://docs.python.org/3/tutorial/controlflow.html#if-statements",
                )
                .with_resource(
                    "Tutorial — for statements",
                    "https://docs.python.org/3/tutorial/controlflow.html#for-statements",
                )
                .with_resource(
                    "Tutorial — break/continue and else",
                    "https://docs.python.org/3/tutorial/controlflow.html#break-and-continue-statements-and-else-clauses-on-loops",
                )
                .with_tip(
                    "Prefer small blocks and “guard clauses”: return early when input is bad; it keeps the main path de-indented and easy to read.",
                ),
            )
            .with_subsection(
                Subsection::new(
                    "if-elif-else",
                    "Decisions: if / elif / else",
                    r"Use `if` to choose a path. Use `elif` for more checks. `else` is the “otherwise”.
Prefer **elif** over nested `if` to stay flat. For quick one-liners, you can use the **conditional expression** (“ternary”).

Guard clause: check a “bad case” first and return/continue early.",
                )
                .with_codes([
                    CodeSample::labeled(
                        "Basics",
                        r#"x = int(input("Score: "))
if x >= 90:
    grade = "A"
elif x >= 80:
    grade = "B"
elif x >= 70:
    grade = "C"
elif x >= 60:
    grade = "D"
else:
    grade = "F"
print(grade)"#,
                    ),
                    CodeSample::labeled(
                        "Guard clause & ternary",
                        r#"def safe_percent(num: float, den: float) -> float | None:
    if den == 0:           # guard clause
        return None
    return (num / den) * 100

age = int(input("Age: "))
ticket = "child" if age < 12 else "adult"  # conditional expression
print(ticket)"#,
                    ),
                ]),
            )
            .with_subsection(
                Subsection::new(
                    "for-loops",
                    "for loops: iterate sequences",
                    r"`for` walks through items in a sequence. Use `range(n)` for 0..n-1.
`enumerate(seq)` gives index and item. `zip(a,b)` loops pairs. Loop dicts via `d.items()`.",
                )
                .with_codes([
                    CodeSample::labeled(
                        "range & enumerate",
                        r#"for i in range(3):
    print("i =", i)

nums = [10, 20, 30]
for idx, val in enumerate(nums):
    print(idx, "->", val)"#,
                    ),
                    CodeSample::labeled(
                        "zip and dicts",
                        r#"names = ["Asha", "Raj", "Mia"]
scores = [88, 92, 79]
for name, score in zip(names, scores):
    print(f"{name}: {score}")

prices = {"apple": 99, "banana": 40}
for fruit, price in prices.items():
    print(fruit, "=", price)"#,
                    ),
                ]),
            )
            .with_subsection(
                Subsection::new(
                    "while-loops",
                    "while loops: “keep going until…”",
                    r"`while` repeats while a condition is True. Update the state inside to avoid infinite loops.
Great for “ask until valid input” or reading from a stream.",
                )
                .with_codes([
                    CodeSample::labeled(
                        "Sentinel loop",
                        r#"while True:
    txt = input("Positive number: ")
    try:
        n = int(txt)
        if n > 0:
            break
    except ValueError:
        pass
    print("Try again...")
print("OK:", n)"#,
                    ),
                    CodeSample::labeled(
                        "Countdown",
                        r#"n = 5
while n > 0:
    print(n)
    n -= 1
print("Blast off!")"#,
                    ),
                ]),
            )
            .with_subsection(
                Subsection::new(
                    "break-continue-else",
                    "break / continue / loop-else",
                    r"`break` leaves the loop now. `continue` skips to the next iteration.
**Loop-else** runs only if the loop *was not broken* (useful for “search not found”).",
                )
                .with_codes([
                    CodeSample::labeled(
                        "continue & break",
                        r#"for x in range(1, 8):
    if x % 2 == 0:
        continue         # skip evens
    print("odd:", x)
    if x > 5:
        break            # stop when > 5"#,
                    ),
                    CodeSample::labeled(
                        "for-else searching",
                        r#"nums = [6, 10, 15, 21]
target = 14
for n in nums:
    if n == target:
        print("found")
        break
else:
    print("not found")  # runs because no break happened"#,
                    ),
                ]),
            )
            .with_subsection(
                Subsection::new(
                    "patterns",
                    "Useful loop patterns",
                    "Common tasks you’ll write all the time: accumulate, find max/min, count items, filter/build new lists.",
                )
                .with_codes([
                    CodeSample::labeled(
                        "Accumulate & average",
                        r"nums = [10, 20, 30]
total = 0
for x in nums:
    total += x
avg = total / len(nums)
print(total, avg)",
                    ),
                    CodeSample::labeled(
                        "Max / min (manual)",
                        r#"nums = [5, 12, 7, 9]
best = nums[0]
for x in nums[1:]:
    if x > best:
        best = x
print("max =", best)   # (min is similar)"#,
                    ),
                    CodeSample::labeled(
                        "Counting with dict",
                        r#"text = "banana"
counts: dict[str, int] = {}
for ch in text:
    counts[ch] = counts.get(ch, 0) + 1
print(counts)"#,
                    ),
                    CodeSample::labeled(
                        "Build new list (filter/map)",
                        r"nums = [1, 2, 3, 4, 5, 6]
evens = []
for x in nums:
    if x % 2 == 0:
        evens.append(x)
squares = [x*x for x in nums]  # comprehension
print(evens, squares)",
                    ),
                ]),
            )
            .with_subsection(
                Subsection::new(
                    "pitfalls",
                    "Pitfalls & tips",
                    r"Avoid classic mistakes:
• Off-by-one: check your `range()` start/stop.  
• Don’t modify a list while iterating it — build a new one or loop on a copy.  
• Prefer iterating items directly over `range(len(seq))` (except when you truly need indexes).",
                )
                .with_codes([
                    CodeSample::labeled(
                        "Modify while iterating (bad) → copy (ok)",
                        r#"items = ["a","bad","b","bad","c"]
# BAD: removing while iterating the same list
# for x in items:
#     if x == "bad":
#         items.remove(x)

# OK: build new
clean = [x for x in items if x != "bad"]
print(clean)

# Or iterate over a copy
items = ["a","bad","b"]
for x in items[:]:
    if x == "bad":
        items.remove(x)
print(items)"#,
                    ),
                ]),
            )
            .with_practice(
                PracticeItem::new(
                    "s5-fizzbuzz",
                    "FizzBuzz",
                    "Print numbers 1..100. For multiples of 3 print Fizz, of 5 print Buzz, of both print FizzBuzz.",
                )
                .with_solution(
                    r#"for n in range(1, 101):
    out = ""
    if n % 3 == 0: out += "Fizz"
    if n % 5 == 0: out += "Buzz"
    print(out or n)"#,
                ),
            )
            .with_practice(
                PracticeItem::new(
                    "s5-password-strength",
                    "Password strength (simple)",
                    r#"Ask for a password. If length >= 8 and it has a digit and a letter, print "OK", else "Weak". Use any()/all()."#,
                )
                .with_solution(
                    r#"pw = input("Password: ")
has_digit = any(ch.isdigit() for ch in pw)
has_alpha = any(ch.isalpha() for ch in pw)
print("OK" if len(pw) >= 8 and has_digit and has_alpha else "Weak")"#,
                ),
            )
            .with_practice(
                PracticeItem::new(
                    "s5-first-prime",
                    "First prime in a range",
                    r#"Ask for start/end and print the first prime number found or "none". Use for-else for primality."#,
                )
                .with_solution(
                    r#"a = int(input("start: "))
b = int(input("end: "))
found = False
for n in range(max(2, a), b+1):
    for d in range(2, int(n**0.5)+1):
        if n % d == 0:
            break
    else:
        print(n)
        found = True
        break
if not found:
    print("none")"#,
                ),
            )
            .with_practice(
                PracticeItem::new(
                    "s5-top-scorer",
                    "Top scorer",
                    "Given names and scores lists, print the name with the highest score (use zip and a loop).",
                )
                .with_starter_code(
                    r#"names = ["Asha","Raj","Mia","Lee"]
scores = [88, 92, 79, 92]"#,
                )
                .with_solution(
                    r#"names = ["Asha","Raj","Mia","Lee"]
scores = [88, 92, 79, 92]
best_name = names[0]
best_score = scores[0]
for name, score in zip(names, scores):
    if score > best_score:
        best_name, best_score = name, score
print(best_name, best_score)"#,
                ),
            )
            .with_practice(
                PracticeItem::new(
                    "s5-menu-loop",
                    "Menu loop",
                    "Show a small menu (1:Add, 2:List, 3:Quit). Keep asking until Quit. Use a while True loop.",
                )
                .with_solution(
                    r#"items: list[str] = []
while True:
    print("1:Add  2:List  3:Quit")
    choice = input("> ")
    if choice == "1":
        items.append(input("Item: "))
    elif choice == "2":
        print(items)
    elif choice == "3":
        break
    else:
        print("Try 1/2/3")"#,
                ),
            ),
    ]
}
