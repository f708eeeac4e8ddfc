use course_core::model::{CodeSample, Lesson, PracticeItem, StartHere, Subsection};

pub(crate) fn lessons() -> Vec<Lesson> {
    vec![
        Lesson::new("collections-i", "Section 7 — Collections I (Lists & Tuples)")
            .with_summary(
                "Lists & tuples, indexing & slicing, mutability, copying, and basic loop patterns.",
            )
            .with_duration(50)
            .with_content(
                "Learn the two most common sequence types in Python: lists (changeable) and tuples (read-only). Master indexing, slicing, mutating, and safe copying.",
            )
            .with_start_here(
                StartHere::new([
                    "Create and index lists; slice safely (start/stop/step, negatives).",
                    "Use core list methods and understand in-place mutation.",
                    "Copy lists correctly; know reference vs copy, shallow vs deep.",
                    "Use tuples for fixed/read-only data; pack/unpack values.",
                    "Iterate with for/enumerate/zip and write simple list builds.",
                ])
                .with_prerequisites([
                    "Section 3 — Variables & Types",
                    "Section 4 — Operators & Expressions",
                    "Section 5 — Control Flow",
                ])
                .with_resource(
                    "Sequence Types (docs)",
                    "https://docs.python.org/3/library/stdtypes.html#sequence-types-list-tuple-range",
                )
                .with_resource(
                    "list methods",
                    "https://docs.python.org/3/tutorial/datastructures.html#more-on-lists",
                )
                .with_resource("copy module", "https://docs.python.org/3/library/copy.html")
                .with_tip(
                    "Many list methods mutate and return None (e.g., .sort(), .append()). Use the return value only if docs say so.",
                ),
            )
            .with_subsection(
                Subsection::new(
                    "lists-basics",
                    "Lists: create, index, slice",
                    r"A **list** holds an ordered collection and is **mutable** (changeable).
Indexing starts at 0. Slicing uses start:stop:step; stop is excluded. Slices never fail if stop is too large.",
                )
                .with_codes([
                    CodeSample::labeled(
                        "Create & index",
                        r"nums = [10, 20, 30, 40]
print(nums[0], nums[-1])     # 10 40
nums[1] = 99                 # mutate
print(nums)                  # [10, 99, 30, 40]",
                    ),
                    CodeSample::labeled(
                        "Slicing",
                        r#"s = ["a","b","c","d","e"]
print(s[1:4])     # ['b','c','d']
print(s[:3])      # first 3
print(s[3:])      # from index 3 to end
print(s[::-1])    # reversed copy"#,
                    ),
                    CodeSample::labeled(
                        "Nested lists (2D)",
                        r"grid = [[1,2,3],[4,5,6]]
print(grid[0][2])   # 3
row = grid[1]
print(row)          # [4,5,6]",
                    ),
                ]),
            )
            .with_subsection(
                Subsection::new(
                    "list-methods",
                    "List mutability & common methods",
                    r"Lists change in place. Key methods:
• add: .append(x), .extend(iter), .insert(i,x)
• remove: .remove(x) (first match), .pop([i]) (returns item), .clear()
• order: .sort(key=..., reverse=...), .reverse()
**sorted(iterable)** returns a new list without changing the original.",
                )
                .with_codes([
                    CodeSample::labeled(
                        "Add & remove",
                        r#"items = ["a","c"]
items.append("d")           # ['a','c','d']
items.insert(1, "b")        # ['a','b','c','d']
items.remove("c")           # ['a','b','d']
last = items.pop()          # removes 'd'; last == 'd'
print(items, last)"#,
                    ),
                    CodeSample::labeled(
                        "Sort vs sorted",
                        r"nums = [3,1,2]
sorted_nums = sorted(nums)      # new list
print(nums, sorted_nums)        # [3,1,2] [1,2,3]
nums.sort(reverse=True)         # mutate in place
print(nums)                     # [3,2,1]",
                    ),
                    CodeSample::labeled(
                        "Reverse & extend",
                        r"a = [1,2,3]
a.reverse()                     # [3,2,1]
a.extend([4,5])                 # [3,2,1,4,5]
print(a)",
                    ),
                ]),
            )
            .with_subsection(
                Subsection::new(
                    "copying",
                    "Copies, references & shallow vs deep",
                    r"Assignment copies the **reference**, not the data. To copy a list: slice `a[:]`, call `list(a)` or `a.copy()`.
These are **shallow** copies: nested lists still point to the same inner objects. Use `copy.deepcopy` for independent deep copies.",
                )
                .with_codes([
                    CodeSample::labeled(
                        "Reference vs copy",
                        r"a = [1,2]
b = a            # same list
b.append(3)
print(a)         # [1,2,3]  (changed!)

a = [1,2]
c = a[:]         # shallow copy
c.append(3)
print(a, c)      # [1,2] [1,2,3]",
                    ),
                    CodeSample::labeled(
                        "Shallow pitfall",
                        r"m1 = [[1],[2]]
m2 = m1[:]              # shallow copy
m2[0].append(99)
print(m1)               # [[1,99],[2]] (shares inner list!)",
                    ),
                    CodeSample::labeled(
                        "Deep copy",
                        r"import copy
m1 = [[1],[2]]
m3 = copy.deepcopy(m1)  # independent
m3[0].append(99)
print(m1, m3)           # [[1],[2]] [[1,99],[2]]",
                    ),
                ]),
            )
            .with_subsection(
                Subsection::new(
                    "tuples",
                    "Tuples: read-only sequences",
                    r"A **tuple** is like a list but **immutable** (can’t change). Good for fixed records or as dict keys.
Create with parentheses (or just commas). Single-element tuples need a trailing comma.",
                )
                .with_codes([
                    CodeSample::labeled(
                        "Create & use",
                        r#"pt = (10, 20)
print(pt[0])           # 10
# pt[0] = 99           # TypeError (immutable)
user = ("Asha", 12)    # name, age"#,
                    ),
                    CodeSample::labeled(
                        "Packing & unpacking",
                        r"x, y = 1, 2         # pack/unpack
x, y = y, x           # swap
t = (5,)              # single-element tuple
print(t, len(t))      # (5,) 1",
                    ),
                    CodeSample::labeled(
                        "As dict keys",
                        r#"rates = {("USD","INR"): 83.2}
print(rates[("USD","INR")])  # 83.2"#,
                    ),
                ]),
            )
            .with_subsection(
                Subsection::new(
                    "loop-patterns",
                    "Looping lists/tuples (patterns)",
                    r"Iterate items directly; use `enumerate` for index+value and `zip` to walk lists together.
Build filtered/mapped results with simple loops (we’ll go deeper with comprehensions later).",
                )
                .with_codes([
                    CodeSample::labeled(
                        "for & enumerate",
                        r#"fruits = ["apple","banana","guava"]
for f in fruits:
    print(f)

for i, f in enumerate(fruits):
    print(i, f)"#,
                    ),
                    CodeSample::labeled(
                        "zip through two lists",
                        r#"names = ["Asha","Raj","Mia"]
scores = [88, 92, 79]
for name, sc in zip(names, scores):
    print(f"{name}: {sc}")"#,
                    ),
                    CodeSample::labeled(
                        "Build new lists",
                        r"nums = [1,2,3,4,5,6]
evens = []
for x in nums:
    if x % 2 == 0:
        evens.append(x)
squares = []
for x in nums:
    squares.append(x*x)
print(evens, squares)",
                    ),
                ]),
            )
            .with_practice(
                PracticeItem::new(
                    "s7-middle-three",
                    "Middle three",
                    "Given a list with odd length, print the middle three elements (use slicing).",
                )
                .with_starter_code(
                    r"data = [3, 8, 9, 12, 15, 18, 21]  # example
# your code",
                )
                .with_solution(
                    r"n = len(data)
mid = n // 2
print(data[mid-1:mid+2])",
                ),
            )
            .with_practice(
                PracticeItem::new(
                    "s7-inplace-zero-neg",
                    "Zero out negatives (in place)",
                    "Replace all negative numbers in a list with 0 (mutate the list).",
                )
                .with_starter_code(
                    r"nums = [3, -2, 5, -7, 0, 4]
# your code",
                )
                .with_solution(
                    r"for i, v in enumerate(nums):
    if v < 0:
        nums[i] = 0
print(nums)",
                ),
            )
            .with_practice(
                PracticeItem::new(
                    "s7-unique-order",
                    "Unique while keeping order",
                    "Remove duplicates from a list while preserving the first occurrence order.",
                )
                .with_solution(
                    r"seen = set()
out = []
for x in [1,2,1,3,2,4,1]:
    if x not in seen:
        seen.add(x)
        out.append(x)
print(out)",
                ),
            )
            .with_practice(
                PracticeItem::new(
                    "s7-min-max-index",
                    "Min, max, and positions",
                    "Print the min and max values and their first index in the list.",
                )
                .with_starter_code(
                    r"nums = [5, 2, 9, 2, 7]
# your code",
                )
                .with_solution(
                    r"mn = min(nums); mx = max(nums)
print(mn, nums.index(mn))
print(mx, nums.index(mx))",
                ),
            )
            .with_practice(
                PracticeItem::new(
                    "s7-tuple-swap",
                    "Swap with tuples",
                    "Read two values and swap them using tuple unpacking. Print before and after.",
                )
                .with_solution(
                    r#"a = input("A: ")
b = input("B: ")
print("before:", a, b)
a, b = b, a
print("after:", a, b)"#,
                ),
            ),
    ]
}
